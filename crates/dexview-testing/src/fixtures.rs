use dexview_types::{Creature, Snapshot, TrainerProfile, TrainerStats};

/// Minimal entry: identity fields set, everything else defaulted.
pub fn creature(dex_no: u32, name: &str) -> Creature {
    Creature {
        pokedex_number: dex_no,
        name: name.to_string(),
        ..Creature::default()
    }
}

/// Owned entry with `count` copies.
pub fn owned(dex_no: u32, name: &str, count: u32) -> Creature {
    Creature {
        owned: count > 0,
        count,
        ..creature(dex_no, name)
    }
}

/// Snapshot wrapping `pokemon` for `user`; aggregates stay defaulted.
pub fn snapshot(user: &str, pokemon: Vec<Creature>) -> Snapshot {
    Snapshot {
        user: TrainerProfile {
            username: user.to_string(),
            avatar: None,
        },
        updated_at: None,
        trainer_stats: TrainerStats::default(),
        pokemon,
    }
}

pub fn snapshot_with_stats(user: &str, pokemon: Vec<Creature>, stats: TrainerStats) -> Snapshot {
    Snapshot {
        trainer_stats: stats,
        ..snapshot(user, pokemon)
    }
}

/// Aggregate block in the exporter's shape, including its quirks (string
/// generation keys, rarity rows without a percent).
pub fn sample_stats() -> TrainerStats {
    serde_json::from_value(serde_json::json!({
        "pokedex": {
            "total_available": 151,
            "unique_owned": 42,
            "total_owned": 97,
            "completion_percent": 27.8
        },
        "generation_progress": {
            "1": { "generation": 1, "region": "kanto", "owned": 40, "total": 151, "completion_percent": 26.5 },
            "2": { "generation": 2, "region": "johto", "owned": 2, "total": 100, "completion_percent": 2.0 }
        },
        "evolution": {
            "evolvable_owned": 8,
            "lines_completed": 1,
            "total_lines": 78,
            "by_stage": { "1": 20, "2": 15, "3": 6, "mega": 1 }
        },
        "types": {
            "grass": { "owned": 4, "total": 14, "completion_percent": 28.6 },
            "water": { "owned": 3, "total": 32, "completion_percent": 9.4 }
        },
        "rarity": {
            "common": { "owned": 30, "total": 95 },
            "legendary": { "owned": 0, "total": 5 }
        },
        "pokeballs": {
            "thrown": 420,
            "success": 97,
            "accuracy_percent": 23.1,
            "details": { "Pokeball Thrown": 300, "Great Ball Thrown": 120 }
        },
        "journey": {
            "watch_hours": 123.5,
            "follow_age": "2 years",
            "sub_age": "Not Subscribed",
            "commands_run": 1044
        }
    }))
    .expect("sample stats parse")
}

/// A small Kanto-plus-Johto collection exercising every filter dimension:
/// three starter lines in different completion states, specials, an item
/// and a trade requirement, a baby, and a second region.
///
/// Validates clean, so `check` tests can start from it.
pub fn kanto_sample() -> Vec<Creature> {
    fn entry(
        dex_no: u32,
        name: &str,
        primary: &str,
        secondary: Option<&str>,
        stage: &str,
        line: &str,
        count: u32,
    ) -> Creature {
        Creature {
            primary_type: primary.to_string(),
            secondary_type: secondary.map(str::to_string),
            region: "kanto".to_string(),
            generation: 1,
            rarity: "common".to_string(),
            evolution_stage: Some(stage.to_string()),
            evolution_line_id: line.to_string(),
            ..owned(dex_no, name, count)
        }
    }

    let mut bulbasaur = entry(1, "Bulbasaur", "Grass", Some("Poison"), "1", "bulbasaur", 2);
    bulbasaur.evolvable = true;
    bulbasaur.quantity_required = 5;
    bulbasaur.requirement = "5 Bulbasaur".to_string();

    let mut ivysaur = entry(2, "Ivysaur", "Grass", Some("Poison"), "2", "bulbasaur", 0);
    ivysaur.evolvable = true;

    let venusaur = entry(3, "Venusaur", "Grass", Some("Poison"), "3", "bulbasaur", 0);

    let mut charmander = entry(4, "Charmander", "Fire", None, "1", "charmander", 1);
    charmander.evolvable = true;

    let mut charmeleon = entry(5, "Charmeleon", "Fire", None, "2", "charmander", 0);
    charmeleon.evolvable = true;

    let charizard = entry(6, "Charizard", "Fire", Some("Flying"), "3", "charmander", 1);

    let mut squirtle = entry(7, "Squirtle", "Water", None, "1", "squirtle", 1);
    squirtle.evolvable = true;
    squirtle.line_complete = true;

    let mut wartortle = entry(8, "Wartortle", "Water", None, "2", "squirtle", 1);
    wartortle.evolvable = true;
    wartortle.line_complete = true;

    let mut blastoise = entry(9, "Blastoise", "Water", None, "3", "squirtle", 2);
    blastoise.line_complete = true;

    let mut pikachu = entry(25, "Pikachu", "Electric", None, "2", "pichu", 3);
    pikachu.evolvable = true;
    pikachu.friendship = 12;
    pikachu.friendship_required = true;
    pikachu.requirement = "50 friendship points".to_string();

    let mut abra = entry(63, "Abra", "Psychic", None, "1", "abra", 1);
    abra.evolvable = true;

    let mut kadabra = entry(64, "Kadabra", "Psychic", None, "2", "abra", 0);
    kadabra.evolvable = true;
    kadabra.trade_required = true;

    let mut gengar = entry(94, "Gengar", "Ghost", Some("Poison"), "3", "gastly", 0);
    gengar.trade_required = true;

    let mut onix = entry(95, "Onix", "Rock", Some("Ground"), "1", "onix", 0);
    onix.evolvable = true;
    onix.item_required = true;
    onix.requirement = "Metal Coat".to_string();

    let mut articuno = entry(144, "Articuno", "Ice", Some("Flying"), "unknown", "", 0);
    articuno.legendary = true;
    articuno.rarity = "legendary".to_string();

    let mut mew = entry(151, "Mew", "Psychic", None, "unknown", "", 0);
    mew.mythical = true;
    mew.rarity = "mythical".to_string();

    let mut chikorita = entry(152, "Chikorita", "Grass", None, "1", "chikorita", 1);
    chikorita.region = "johto".to_string();
    chikorita.generation = 2;
    chikorita.evolvable = true;

    let mut togepi = entry(175, "Togepi", "Fairy", None, "1", "togepi", 1);
    togepi.region = "johto".to_string();
    togepi.generation = 2;
    togepi.baby = true;
    togepi.evolvable = true;
    togepi.friendship_required = true;

    vec![
        bulbasaur, ivysaur, venusaur, charmander, charmeleon, charizard, squirtle, wartortle,
        blastoise, pikachu, abra, kadabra, gengar, onix, articuno, mew, chikorita, togepi,
    ]
}
