use dexview_types::Creature;
use owo_colors::OwoColorize;

use super::list::type_badges;
use super::{wrap_text, FormatOptions};

/// Full detail card for one entry, plus its progression chain when it has one.
///
/// `chain` is the entry's line in display order; pass a single-element slice
/// for entries without one.
pub fn format_detail(creature: &Creature, chain: &[&Creature], opts: &FormatOptions) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(header_line(creature, opts));
    lines.push(ownership_line(creature, opts));

    lines.push(format!(
        "Region: {} (Gen {})    Rarity: {}",
        creature.region, creature.generation, creature.rarity
    ));

    let stage = creature.evolution_stage.as_deref().unwrap_or("?");
    let line_state = if creature.evolution_line_id.is_empty() {
        "none".to_string()
    } else if creature.line_complete {
        format!("{} (complete)", creature.evolution_line_id)
    } else {
        format!("{} (incomplete)", creature.evolution_line_id)
    };
    lines.push(format!("Stage: {}    Line: {}", stage, line_state));

    let flags = active_flags(creature);
    if !flags.is_empty() {
        lines.push(format!("Flags: {}", flags.join(", ")));
    }

    if creature.friendship > 0 {
        lines.push(format!("Friendship: {} pts", creature.friendship));
    }
    if creature.evolvable && !creature.requirement.is_empty() {
        lines.push(format!("Next stage: {}", creature.requirement));
    }

    if let Some(stats) = &creature.stats {
        lines.push(String::new());
        lines.push(format!(
            "HP {:>3}  Atk {:>3}  Def {:>3}  SpA {:>3}  SpD {:>3}  Spe {:>3}  Total {}",
            stats.hp,
            stats.attack,
            stats.defense,
            stats.sp_attack,
            stats.sp_defense,
            stats.speed,
            stats.total()
        ));
    }
    if let Some(physical) = &creature.physical {
        lines.push(format!(
            "Height: {} m    Weight: {} kg",
            physical.height, physical.weight
        ));
    }

    if !creature.pokedex_entry.is_empty() {
        lines.push(String::new());
        let width = opts.wrap_width().min(76);
        lines.extend(wrap_text(&creature.pokedex_entry, width));
    }

    if chain.len() > 1 {
        lines.push(String::new());
        lines.push(chain_line(creature, chain, opts));
    }

    lines
}

fn header_line(creature: &Creature, opts: &FormatOptions) -> String {
    let number = creature.display_number();
    let badges = type_badges(creature, opts);

    if opts.enable_color {
        format!(
            "{}  {}  {}",
            number.bright_black(),
            creature.name.bold(),
            badges
        )
    } else {
        format!("{}  {}  {}", number, creature.name, badges)
    }
}

fn ownership_line(creature: &Creature, opts: &FormatOptions) -> String {
    if creature.owned {
        let text = format!("Owned: x{}", creature.count);
        if opts.enable_color {
            text.green().to_string()
        } else {
            text
        }
    } else if opts.enable_color {
        "Not owned".bright_black().to_string()
    } else {
        "Not owned".to_string()
    }
}

/// "Chain: Pichu #172 -> [Pikachu #025] -> Raichu #026", current bracketed.
fn chain_line(current: &Creature, chain: &[&Creature], opts: &FormatOptions) -> String {
    let hops: Vec<String> = chain
        .iter()
        .map(|member| {
            let label = format!("{} {}", member.name, member.display_number());
            if member.pokedex_number == current.pokedex_number {
                format!("[{}]", label)
            } else if opts.enable_color && !member.owned {
                label.bright_black().to_string()
            } else {
                label
            }
        })
        .collect();

    format!("Chain: {}", hops.join(" -> "))
}

fn active_flags(creature: &Creature) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if creature.legendary {
        flags.push("legendary");
    }
    if creature.mythical {
        flags.push("mythical");
    }
    if creature.baby {
        flags.push("baby");
    }
    if creature.item_required {
        flags.push("item required");
    }
    if creature.trade_required {
        flags.push("trade required");
    }
    if creature.friendship_required {
        flags.push("friendship required");
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexview_types::BaseStats;

    fn plain() -> FormatOptions {
        FormatOptions {
            enable_color: false,
            width: Some(76),
        }
    }

    fn pikachu() -> Creature {
        Creature {
            pokedex_number: 25,
            name: "Pikachu".to_string(),
            primary_type: "Electric".to_string(),
            owned: true,
            count: 3,
            region: "kanto".to_string(),
            generation: 1,
            rarity: "common".to_string(),
            evolution_stage: Some("2".to_string()),
            evolution_line_id: "pichu".to_string(),
            evolvable: true,
            requirement: "50 friendship points".to_string(),
            friendship: 12,
            stats: Some(BaseStats {
                hp: 35,
                attack: 55,
                defense: 40,
                sp_attack: 50,
                sp_defense: 50,
                speed: 90,
            }),
            pokedex_entry: "It stores electricity in its cheeks.".to_string(),
            ..Creature::default()
        }
    }

    #[test]
    fn detail_covers_every_populated_section() {
        let creature = pikachu();
        let lines = format_detail(&creature, &[&creature], &plain());
        let text = lines.join("\n");

        assert!(text.contains("#025  Pikachu  Electric"));
        assert!(text.contains("Owned: x3"));
        assert!(text.contains("Region: kanto (Gen 1)"));
        assert!(text.contains("Stage: 2    Line: pichu (incomplete)"));
        assert!(text.contains("Friendship: 12 pts"));
        assert!(text.contains("Next stage: 50 friendship points"));
        assert!(text.contains("Total 320"));
        assert!(text.contains("stores electricity"));
    }

    #[test]
    fn sparse_entry_skips_empty_sections() {
        let creature = Creature {
            pokedex_number: 132,
            name: "Ditto".to_string(),
            primary_type: "Normal".to_string(),
            region: "kanto".to_string(),
            generation: 1,
            rarity: "uncommon".to_string(),
            ..Creature::default()
        };

        let lines = format_detail(&creature, &[&creature], &plain());
        let text = lines.join("\n");

        assert!(text.contains("Not owned"));
        assert!(text.contains("Line: none"));
        assert!(!text.contains("Flags:"));
        assert!(!text.contains("Friendship:"));
        assert!(!text.contains("HP"));
        assert!(!text.contains("Chain:"));
    }

    #[test]
    fn flags_line_lists_active_tags_in_order() {
        let creature = Creature {
            pokedex_number: 151,
            name: "Mew".to_string(),
            primary_type: "Psychic".to_string(),
            mythical: true,
            item_required: true,
            ..Creature::default()
        };

        let lines = format_detail(&creature, &[&creature], &plain());
        assert!(lines.contains(&"Flags: mythical, item required".to_string()));
    }

    #[test]
    fn chain_brackets_the_current_entry() {
        let mut pichu = pikachu();
        pichu.pokedex_number = 172;
        pichu.name = "Pichu".to_string();
        pichu.evolution_stage = Some("1".to_string());

        let mut raichu = pikachu();
        raichu.pokedex_number = 26;
        raichu.name = "Raichu".to_string();
        raichu.evolution_stage = Some("3".to_string());

        let current = pikachu();
        let chain = [&pichu, &current, &raichu];

        let lines = format_detail(&current, &chain, &plain());
        let chain_text = lines.last().unwrap();
        assert_eq!(
            chain_text,
            "Chain: Pichu #172 -> [Pikachu #025] -> Raichu #026"
        );
    }

    #[test]
    fn long_dex_entries_wrap() {
        let mut creature = pikachu();
        creature.pokedex_entry =
            "When several of these gather their electricity can build and cause lightning storms across the whole region"
                .to_string();

        let lines = format_detail(&creature, &[&creature], &plain());
        assert!(lines.iter().all(|line| line.chars().count() <= 76));
    }
}
