use anyhow::Result;

use crate::context::AppContext;
use crate::output::{format_stats, FormatOptions};
use crate::types::{OutputFormat, StatsSection};

pub fn handle(ctx: &AppContext, section: StatsSection) -> Result<()> {
    let (user, snapshot) = ctx.snapshot()?;

    match ctx.format {
        OutputFormat::Json => {
            let stats = &snapshot.trainer_stats;
            let value = match section {
                StatsSection::All => serde_json::to_value(stats)?,
                StatsSection::Dex => serde_json::to_value(&stats.pokedex)?,
                StatsSection::Generations => serde_json::to_value(&stats.generation_progress)?,
                StatsSection::Evolution => serde_json::to_value(&stats.evolution)?,
                StatsSection::Types => serde_json::to_value(&stats.types)?,
                StatsSection::Rarity => serde_json::to_value(&stats.rarity)?,
                StatsSection::Balls => serde_json::to_value(&stats.pokeballs)?,
                StatsSection::Journey => serde_json::to_value(&stats.journey)?,
            };
            let payload = serde_json::json!({
                "user": user,
                "section": section.to_string(),
                "stats": value,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            let opts = FormatOptions {
                enable_color: ctx.colors,
                width: None,
            };
            for line in format_stats(user, snapshot, section, &opts) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
