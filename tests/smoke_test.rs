//! Smoke tests: the binary runs and its surface is wired up.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn help_lists_top_level_commands() {
    let env = TestEnv::new();
    env.wmt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gap"))
        .stdout(predicate::str::contains("hotkey"))
        .stdout(predicate::str::contains("bar"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn version_flag_works() {
    let env = TestEnv::new();
    env.wmt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wmt"));
}

#[test]
fn unknown_subcommand_fails() {
    let env = TestEnv::new();
    env.wmt().arg("frobnicate").assert().failure();
}
