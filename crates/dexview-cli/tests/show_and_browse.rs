use dexview_testing::assertions::assert_strings_at;
use dexview_testing::fixtures::{kanto_sample, snapshot};
use dexview_testing::TestWorld;

fn world_with_sample() -> TestWorld {
    let world = TestWorld::new();
    world.write_snapshot("scromf9001", &snapshot("scromf9001", kanto_sample()));
    world
}

#[test]
fn show_by_number_renders_the_detail_card() {
    let world = world_with_sample();
    let result = world.run(&["show", "25"]);

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("#025  Pikachu  Electric"));
    assert!(result.stdout.contains("Owned: x3"));
    assert!(result.stdout.contains("Region: kanto (Gen 1)"));
    assert!(result.stdout.contains("Friendship: 12 pts"));
    assert!(result.stdout.contains("Next stage: 50 friendship points"));
}

#[test]
fn show_by_name_is_case_insensitive() {
    let world = world_with_sample();
    let result = world.run(&["show", "PIKACHU"]);

    assert!(result.success());
    assert!(result.stdout.contains("#025  Pikachu"));
}

#[test]
fn show_resolves_a_unique_substring() {
    let world = world_with_sample();
    let result = world.run(&["show", "blasto"]);

    assert!(result.success());
    assert!(result.stdout.contains("#009  Blastoise"));
}

#[test]
fn show_json_includes_the_chain_in_stage_order() {
    let world = world_with_sample();
    let doc = world.run(&["show", "6", "--format", "json"]).json();

    assert_eq!(doc["creature"]["name"], "Charizard");
    assert_eq!(doc["creature"]["pokedex_number"], 6);
    assert_strings_at(
        &doc,
        "/chain",
        "name",
        &["Charmander", "Charmeleon", "Charizard"],
    );
}

#[test]
fn show_plain_marks_the_current_chain_member() {
    let world = world_with_sample();
    let result = world.run(&["show", "8"]);

    assert!(result
        .stdout
        .contains("Chain: Squirtle #007 -> [Wartortle #008] -> Blastoise #009"));
}

#[test]
fn entries_without_a_line_have_no_chain() {
    let world = world_with_sample();

    let doc = world.run(&["show", "151", "--format", "json"]).json();
    assert_eq!(doc["chain"].as_array().map(|c| c.len()), Some(1));

    let plain = world.run(&["show", "151"]);
    assert!(!plain.stdout.contains("Chain:"));
}

#[test]
fn ambiguous_names_list_the_candidates() {
    let world = world_with_sample();
    let result = world.run(&["show", "saur"]);

    assert!(!result.success());
    assert!(result.stderr.contains("Bulbasaur"));
    assert!(result.stderr.contains("Ivysaur"));
    assert!(result.stderr.contains("Venusaur"));
}

#[test]
fn unknown_targets_fail() {
    let world = world_with_sample();

    let by_number = world.run(&["show", "999"]);
    assert!(!by_number.success());
    assert!(by_number.stderr.contains("999"));

    let by_name = world.run(&["show", "missingno"]);
    assert!(!by_name.success());
    assert!(by_name.stderr.contains("missingno"));
}

#[test]
fn browse_rejects_an_unknown_start_before_opening() {
    let world = world_with_sample();
    let result = world.run(&["browse", "missingno"]);

    assert!(!result.success());
    assert!(result.stderr.contains("missingno"));
}

#[test]
fn browse_refuses_an_empty_snapshot() {
    let world = TestWorld::new();
    world.write_snapshot("ash", &snapshot("ash", vec![]));

    let result = world.run(&["browse"]);
    assert!(!result.success());
    assert!(result.stderr.contains("no entries"));
}
