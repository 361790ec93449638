use dexview_types::Creature;
use owo_colors::OwoColorize;

use super::{type_color, FormatOptions};

/// One card line per entry: dex number, owned count, name, type badges.
pub fn format_cards(creatures: &[&Creature], opts: &FormatOptions) -> Vec<String> {
    if creatures.is_empty() {
        return vec!["No entries match the active filters".to_string()];
    }

    let name_width = creatures
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    creatures
        .iter()
        .map(|c| format_card(c, name_width, opts))
        .collect()
}

fn format_card(creature: &Creature, name_width: usize, opts: &FormatOptions) -> String {
    let number = creature.display_number();
    let count = if creature.owned {
        format!("x{}", creature.count)
    } else {
        "-".to_string()
    };

    // Pad before coloring so ANSI codes don't skew the columns.
    let count_col = format!("{:<5}", count);
    let name_col = format!("{:<width$}", creature.name, width = name_width);
    let types = type_badges(creature, opts);

    if !opts.enable_color {
        return format!("{number}  {count_col} {name_col}  {types}");
    }

    if creature.owned {
        format!(
            "{}  {} {}  {}",
            number.bright_black(),
            count_col.green(),
            name_col,
            types
        )
    } else {
        format!(
            "{}  {} {}  {}",
            number.bright_black(),
            count_col.bright_black(),
            name_col.bright_black(),
            types
        )
    }
}

/// "Grass / Poison" with each type in its badge color.
pub(super) fn type_badges(creature: &Creature, opts: &FormatOptions) -> String {
    let mut parts = vec![creature.primary_type.clone()];
    if let Some(secondary) = creature.secondary() {
        parts.push(secondary.to_string());
    }

    if opts.enable_color {
        let colored: Vec<String> = parts
            .iter()
            .map(|name| name.color(type_color(name)).to_string())
            .collect();
        colored.join(" / ")
    } else {
        parts.join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> FormatOptions {
        FormatOptions {
            enable_color: false,
            width: Some(80),
        }
    }

    fn creature(dex_no: u32, name: &str, primary: &str, secondary: &str, count: u32) -> Creature {
        Creature {
            pokedex_number: dex_no,
            name: name.to_string(),
            primary_type: primary.to_string(),
            secondary_type: (!secondary.is_empty()).then(|| secondary.to_string()),
            owned: count > 0,
            count,
            ..Creature::default()
        }
    }

    #[test]
    fn cards_align_and_mark_ownership() {
        let bulbasaur = creature(1, "Bulbasaur", "Grass", "Poison", 2);
        let charizard = creature(6, "Charizard", "Fire", "Flying", 0);
        let rows = [&bulbasaur, &charizard];

        let lines = format_cards(&rows, &plain());
        insta::assert_snapshot!(lines.join("\n"), @r"
        #001  x2    Bulbasaur  Grass / Poison
        #006  -     Charizard  Fire / Flying
        ");
    }

    #[test]
    fn empty_result_explains_itself() {
        let lines = format_cards(&[], &plain());
        assert_eq!(lines, vec!["No entries match the active filters"]);
    }

    #[test]
    fn single_type_has_no_separator() {
        let pikachu = creature(25, "Pikachu", "Electric", "", 1);
        let lines = format_cards(&[&pikachu], &plain());
        assert!(lines[0].ends_with("Electric"));
        assert!(!lines[0].contains('/'));
    }

    #[test]
    fn null_secondary_is_dropped_from_badges() {
        let pikachu = creature(25, "Pikachu", "Electric", "Null", 1);
        assert_eq!(type_badges(&pikachu, &plain()), "Electric");
    }

    #[test]
    fn colored_cards_still_carry_the_name() {
        let bulbasaur = creature(1, "Bulbasaur", "Grass", "Poison", 2);
        let opts = FormatOptions {
            enable_color: true,
            width: Some(80),
        };

        let lines = format_cards(&[&bulbasaur], &opts);
        assert!(lines[0].contains("Bulbasaur"));
        assert!(lines[0].contains("\u{1b}["));
    }
}
