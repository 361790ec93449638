use chrono::Utc;
use dexview_types::Snapshot;
use owo_colors::OwoColorize;

use super::{format_percent, format_relative, type_color, FormatOptions};
use crate::types::StatsSection;

const BAR_WIDTH: usize = 20;

/// Render the exporter's aggregate block, either whole or one section.
pub fn format_stats(
    user: &str,
    snapshot: &Snapshot,
    section: StatsSection,
    opts: &FormatOptions,
) -> Vec<String> {
    let stats = &snapshot.trainer_stats;
    let mut lines = Vec::new();

    lines.push(header(user, snapshot, opts));
    lines.push(String::new());

    let all = section == StatsSection::All;

    if all || section == StatsSection::Dex {
        lines.push(title("Pokedex", opts));
        lines.push(format!(
            "  Unique: {}/{}  {}  {}",
            stats.pokedex.unique_owned,
            stats.pokedex.total_available,
            bar(stats.pokedex.completion_percent),
            format_percent(stats.pokedex.completion_percent)
        ));
        lines.push(format!("  Copies: {}", stats.pokedex.total_owned));
        lines.push(String::new());
    }

    if all || section == StatsSection::Generations {
        lines.push(title("Generations", opts));
        for progress in stats.generation_progress.values() {
            lines.push(format!(
                "  Gen {} ({})  {}/{}  {}  {}",
                progress.generation,
                progress.region,
                progress.owned,
                progress.total,
                bar(progress.completion_percent),
                format_percent(progress.completion_percent)
            ));
        }
        lines.push(String::new());
    }

    if all || section == StatsSection::Evolution {
        lines.push(title("Evolution", opts));
        lines.push(format!(
            "  Lines completed: {}/{}",
            stats.evolution.lines_completed, stats.evolution.total_lines
        ));
        lines.push(format!(
            "  Evolvable owned: {}",
            stats.evolution.evolvable_owned
        ));
        for (stage, owned) in &stats.evolution.by_stage {
            lines.push(format!("  Stage {}: {}", stage, owned));
        }
        lines.push(String::new());
    }

    if all || section == StatsSection::Types {
        lines.push(title("Types", opts));
        for (name, progress) in &stats.types {
            let label = if opts.enable_color {
                format!("{:<10}", name).color(type_color(name)).to_string()
            } else {
                format!("{:<10}", name)
            };
            lines.push(format!(
                "  {}  {}/{}  {}",
                label,
                progress.owned,
                progress.total,
                format_percent(progress.completion_percent)
            ));
        }
        lines.push(String::new());
    }

    if all || section == StatsSection::Rarity {
        lines.push(title("Rarity", opts));
        for (tier, progress) in &stats.rarity {
            lines.push(format!(
                "  {:<10}  {}/{}",
                tier, progress.owned, progress.total
            ));
        }
        lines.push(String::new());
    }

    if all || section == StatsSection::Balls {
        lines.push(title("Pokeballs", opts));
        lines.push(format!(
            "  Thrown: {}  Caught: {}  Accuracy: {}",
            stats.pokeballs.thrown,
            stats.pokeballs.success,
            format_percent(stats.pokeballs.accuracy_percent)
        ));
        for (counter, value) in &stats.pokeballs.details {
            lines.push(format!("  {}: {}", counter, value));
        }
        lines.push(String::new());
    }

    if all || section == StatsSection::Journey {
        lines.push(title("Journey", opts));
        lines.push(format!("  Watch hours: {}", stats.journey.watch_hours));
        lines.push(format!("  Following: {}", stats.journey.follow_age));
        lines.push(format!("  Subscribed: {}", stats.journey.sub_age));
        lines.push(format!("  Commands run: {}", stats.journey.commands_run));
        lines.push(String::new());
    }

    // Drop the trailing spacer.
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

fn header(user: &str, snapshot: &Snapshot, opts: &FormatOptions) -> String {
    let mut header = format!("Trainer {}", user);
    if let Some(updated_at) = snapshot.updated_at {
        header.push_str(&format!(
            "  (updated {})",
            format_relative(updated_at, Utc::now())
        ));
    }
    if opts.enable_color {
        header.bold().to_string()
    } else {
        header
    }
}

fn title(text: &str, opts: &FormatOptions) -> String {
    if opts.enable_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}
