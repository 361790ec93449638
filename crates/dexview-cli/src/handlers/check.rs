use anyhow::Result;
use owo_colors::OwoColorize;

use dexview_engine::{validate, Severity};

use crate::context::AppContext;
use crate::types::OutputFormat;

pub fn handle(ctx: &AppContext) -> Result<()> {
    let (user, snapshot) = ctx.snapshot()?;
    let findings = validate(snapshot);

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    if ctx.format == OutputFormat::Json {
        let payload = serde_json::json!({
            "user": user,
            "entries": snapshot.pokemon.len(),
            "errors": errors,
            "warnings": warnings,
            "findings": findings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if findings.is_empty() {
        println!(
            "No problems found in {}'s snapshot ({} entries)",
            user,
            snapshot.pokemon.len()
        );
        return Ok(());
    }

    for finding in &findings {
        let severity = match finding.severity {
            Severity::Error => {
                if ctx.colors {
                    "error".red().to_string()
                } else {
                    "error".to_string()
                }
            }
            Severity::Warning => {
                if ctx.colors {
                    "warning".yellow().to_string()
                } else {
                    "warning".to_string()
                }
            }
        };

        match finding.dex_no {
            Some(dex_no) => println!("{}  #{:03}  {}", severity, dex_no, finding.message),
            None => println!("{}  {}", severity, finding.message),
        }
    }

    println!();
    println!("{} errors, {} warnings", errors, warnings);

    Ok(())
}
