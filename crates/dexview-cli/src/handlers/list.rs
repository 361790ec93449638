use anyhow::Result;

use dexview_engine::{apply, sort_creatures, FilterState};

use crate::args::FilterArgs;
use crate::context::AppContext;
use crate::output::{format_cards, FormatOptions};
use crate::types::{OutputFormat, SortKeyArg};

pub fn handle(
    ctx: &AppContext,
    filters: &FilterArgs,
    sort: SortKeyArg,
    limit: Option<usize>,
) -> Result<()> {
    let (user, snapshot) = ctx.snapshot()?;

    let state = filters.to_state();
    let mut selected = apply(&snapshot.pokemon, &state);
    sort_creatures(&mut selected, sort.into());
    if let Some(limit) = limit {
        selected.truncate(limit);
    }

    match ctx.format {
        OutputFormat::Json => {
            let creatures: Vec<serde_json::Value> = selected
                .iter()
                .map(|c| {
                    let mut types = vec![c.primary_type.clone()];
                    if let Some(secondary) = c.secondary() {
                        types.push(secondary.to_string());
                    }
                    serde_json::json!({
                        "dex_no": c.pokedex_number,
                        "name": c.name,
                        "types": types,
                        "owned": c.owned,
                        "count": c.count,
                    })
                })
                .collect();

            let payload = serde_json::json!({
                "user": user,
                "total": snapshot.pokemon.len(),
                "shown": creatures.len(),
                "creatures": creatures,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            let filtered_note = if state == FilterState::default() && limit.is_none() {
                String::new()
            } else {
                " (filtered)".to_string()
            };
            println!(
                "{}: {} of {} entries{}",
                user,
                selected.len(),
                snapshot.pokemon.len(),
                filtered_note
            );
            println!();

            let opts = FormatOptions {
                enable_color: ctx.colors,
                width: None,
            };
            for line in format_cards(&selected, &opts) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
