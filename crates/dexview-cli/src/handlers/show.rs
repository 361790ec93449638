use anyhow::{anyhow, Result};

use dexview_engine::{index_of, line_members};
use dexview_types::Creature;

use crate::context::AppContext;
use crate::output::{format_detail, FormatOptions};
use crate::types::OutputFormat;

pub fn handle(ctx: &AppContext, target: &str) -> Result<()> {
    let (_user, snapshot) = ctx.snapshot()?;

    let dex_no = resolve_target(&snapshot.pokemon, target)?;
    let idx = index_of(&snapshot.pokemon, dex_no)?;
    let creature = &snapshot.pokemon[idx];
    let chain = line_members(&snapshot.pokemon, creature);

    match ctx.format {
        OutputFormat::Json => {
            let chain_view: Vec<serde_json::Value> = chain
                .iter()
                .map(|member| {
                    serde_json::json!({
                        "dex_no": member.pokedex_number,
                        "name": member.name,
                        "stage": member.evolution_stage,
                        "owned": member.owned,
                    })
                })
                .collect();
            let payload = serde_json::json!({
                "creature": creature,
                "chain": chain_view,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            let opts = FormatOptions {
                enable_color: ctx.colors,
                width: None,
            };
            for line in format_detail(creature, &chain, &opts) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Resolve an `<id|name>` argument to a dex number.
///
/// Numeric targets must match an identifier exactly. Text targets try an
/// exact name first, then a unique case-insensitive substring.
pub(crate) fn resolve_target(collection: &[Creature], target: &str) -> Result<u32> {
    if let Ok(dex_no) = target.parse::<u32>() {
        return match index_of(collection, dex_no) {
            Ok(_) => Ok(dex_no),
            Err(_) => Err(anyhow!("no entry with dex number {dex_no}")),
        };
    }

    let lowered = target.to_lowercase();
    if let Some(exact) = collection
        .iter()
        .find(|c| c.name.to_lowercase() == lowered)
    {
        return Ok(exact.pokedex_number);
    }

    let matches: Vec<&Creature> = collection
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&lowered))
        .collect();
    match matches.as_slice() {
        [] => Err(anyhow!("no entry matches \"{target}\"")),
        [only] => Ok(only.pokedex_number),
        many => {
            let names: Vec<&str> = many.iter().map(|c| c.name.as_str()).collect();
            Err(anyhow!(
                "\"{}\" is ambiguous: {}",
                target,
                names.join(", ")
            ))
        }
    }
}
