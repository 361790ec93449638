use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::args::{Cli, Commands};
use crate::config::{Config, resolve_data_dir};
use crate::context::AppContext;
use crate::handlers;
use crate::types::OutputFormat;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let config = Config::load_from(&data_dir.join("config.toml"))?;

    let colors = cli.format == OutputFormat::Plain
        && !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    let ctx = AppContext::new(data_dir, config, cli.user, cli.format, colors);

    match command {
        Commands::Users => handlers::users::handle(&ctx),
        Commands::List {
            filters,
            sort,
            limit,
        } => handlers::list::handle(&ctx, &filters, sort, limit),
        Commands::Show { target } => handlers::show::handle(&ctx, &target),
        Commands::Browse { start } => handlers::browse::handle(&ctx, start.as_deref()),
        Commands::Stats { section } => handlers::stats::handle(&ctx, section),
        Commands::Check => handlers::check::handle(&ctx),
        Commands::Export {
            filters,
            output,
            export_format,
        } => handlers::export::handle(&ctx, &filters, output.as_deref(), export_format),
        Commands::Watch => handlers::watch::handle(&ctx),
    }
}

/// Printed when `dexview` runs without a subcommand.
fn show_guidance(data_dir: &Path) {
    println!("dexview - creature collection snapshot browser");
    println!();

    let users = dexview_source::list_users(data_dir).unwrap_or_default();
    if users.is_empty() {
        println!(
            "No snapshots found under {}",
            data_dir.join("data").display()
        );
        println!("Drop an exporter file there as data/<user>.json, then:");
    } else {
        let names: Vec<&str> = users.iter().map(|entry| entry.user.as_str()).collect();
        println!("Snapshots available for: {}", names.join(", "));
        println!();
        println!("Quick commands:");
    }
    println!("  dexview users            # List available snapshots");
    println!("  dexview list --owned     # Owned entries as cards");
    println!("  dexview show 25          # One entry in full");
    println!("  dexview browse           # Interactive detail browser");
    println!("  dexview stats            # Exporter aggregates");
    println!("  dexview check            # Consistency report");
}
