use dexview_types::{Creature, MEGA_STAGE};

/// Sort key for a stage tag.
///
/// Numeric stages keep their order, the terminal variant sorts after every
/// numeric stage, and anything unparseable (including an absent tag) sorts
/// first. Filtering never uses this key; stage filters compare literally.
pub fn stage_order_key(stage: Option<&str>) -> u8 {
    match stage {
        Some(s) if s.eq_ignore_ascii_case(MEGA_STAGE) => u8::MAX,
        Some(s) => s.trim().parse().unwrap_or(0),
        None => 0,
    }
}

/// All members of `creature`'s progression chain, stage-ordered.
///
/// Entries share a chain when their line identifiers match. An entry
/// without a line identifier is its own chain. Ties on the stage key fall
/// back to dex order.
pub fn line_members<'a>(collection: &'a [Creature], creature: &'a Creature) -> Vec<&'a Creature> {
    if creature.evolution_line_id.is_empty() {
        return vec![creature];
    }

    let mut members: Vec<&Creature> = collection
        .iter()
        .filter(|c| c.evolution_line_id == creature.evolution_line_id)
        .collect();
    members.sort_by_key(|c| (stage_order_key(c.evolution_stage.as_deref()), c.pokedex_number));
    members
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_entry(dex_no: u32, name: &str, line: &str, stage: Option<&str>) -> Creature {
        Creature {
            pokedex_number: dex_no,
            name: name.to_string(),
            evolution_line_id: line.to_string(),
            evolution_stage: stage.map(str::to_string),
            ..Creature::default()
        }
    }

    #[test]
    fn stage_key_orders_numeric_then_terminal() {
        assert!(stage_order_key(Some("1")) < stage_order_key(Some("2")));
        assert!(stage_order_key(Some("3")) < stage_order_key(Some("mega")));
        assert!(stage_order_key(Some("Mega")) == u8::MAX);
        assert_eq!(stage_order_key(Some("unknown")), 0);
        assert_eq!(stage_order_key(None), 0);
    }

    #[test]
    fn members_come_back_stage_ordered() {
        // Stored out of stage order; charizard's mega form last regardless
        // of its dex position.
        let collection = vec![
            chain_entry(6, "Charizard", "charmander", Some("3")),
            chain_entry(5, "Charmeleon", "charmander", Some("2")),
            chain_entry(4, "Charmander", "charmander", Some("1")),
            chain_entry(10006, "Mega Charizard", "charmander", Some("mega")),
            chain_entry(25, "Pikachu", "pichu", Some("2")),
        ];

        let members = line_members(&collection, &collection[1]);
        let names: Vec<&str> = members.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Charmander", "Charmeleon", "Charizard", "Mega Charizard"]
        );
    }

    #[test]
    fn unparseable_stage_sorts_before_stage_one() {
        let collection = vec![
            chain_entry(2, "Second", "line", Some("1")),
            chain_entry(1, "First", "line", Some("unknown")),
        ];

        let members = line_members(&collection, &collection[0]);
        let names: Vec<&str> = members.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn entry_without_line_id_is_its_own_chain() {
        let collection = vec![
            chain_entry(132, "Ditto", "", None),
            chain_entry(133, "Eevee", "eevee", Some("1")),
        ];

        let members = line_members(&collection, &collection[0]);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Ditto");
    }
}
