use predicates::prelude::*;

use crate::common::modern_cli;

#[test]
fn prints_version() {
    modern_cli()
        .arg("--version")
        .assert()
        .success()
        .stdout("modern-cli 1.0.0\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn shows_help() {
    modern_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process").and(predicate::str::contains("list")));
}

#[test]
fn no_arguments_prints_help() {
    modern_cli()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    modern_cli().arg("frobnicate").assert().code(2);
}
