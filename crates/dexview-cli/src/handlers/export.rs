use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use dexview_engine::apply;
use dexview_types::Creature;

use crate::args::FilterArgs;
use crate::context::AppContext;
use crate::types::ExportFormat;

pub fn handle(
    ctx: &AppContext,
    filters: &FilterArgs,
    output: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    let (user, snapshot) = ctx.snapshot()?;

    let state = filters.to_state();
    let selected = apply(&snapshot.pokemon, &state);

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    match format {
        ExportFormat::Csv => write_csv(writer, &selected)?,
        ExportFormat::Json => write_json(writer, user, &selected)?,
    }

    if let Some(path) = output {
        println!("Exported {} entries to {}", selected.len(), path.display());
    }

    Ok(())
}

fn write_csv(writer: Box<dyn Write>, creatures: &[&Creature]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "dex_no",
        "name",
        "primary_type",
        "secondary_type",
        "region",
        "generation",
        "rarity",
        "stage",
        "owned",
        "count",
    ])?;

    for creature in creatures {
        csv.write_record([
            creature.pokedex_number.to_string(),
            creature.name.clone(),
            creature.primary_type.clone(),
            creature.secondary().unwrap_or_default().to_string(),
            creature.region.clone(),
            creature.generation.to_string(),
            creature.rarity.clone(),
            creature.evolution_stage.clone().unwrap_or_default(),
            creature.owned.to_string(),
            creature.count.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

fn write_json(mut writer: Box<dyn Write>, user: &str, creatures: &[&Creature]) -> Result<()> {
    let payload = serde_json::json!({
        "user": user,
        "total": creatures.len(),
        "creatures": creatures,
    });
    writeln!(writer, "{}", serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}
