use predicates::prelude::*;

use dexview_testing::TestWorld;

#[test]
fn help_lists_every_subcommand() {
    let world = TestWorld::new();
    world
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn version_flag_works() {
    let world = TestWorld::new();
    world
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dexview"));
}

#[test]
fn unknown_subcommands_fail_with_usage() {
    let world = TestWorld::new();
    world
        .command()
        .arg("capture")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_filter_values_are_rejected_at_parse_time() {
    let world = TestWorld::new();
    world
        .command()
        .args(["list", "--special", "shiny"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn numeric_limit_rejects_garbage() {
    let world = TestWorld::new();
    world
        .command()
        .args(["list", "--limit", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));
}
