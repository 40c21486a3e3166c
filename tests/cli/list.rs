use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::{TempDir, modern_cli};

#[test]
fn json_listing_on_stdout() {
    let dir = TempDir::new("list");
    dir.write_file("x.txt", "0123456789");

    let assert = modern_cli().arg("list").arg(dir.path()).arg("--json").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, json!([{"name": "x.txt", "type": "file", "size": 10}]));
}

#[test]
fn json_orders_directories_first() {
    let dir = TempDir::new("list");
    dir.write_file("b.txt", "bb");
    dir.write_file("a.txt", "a");
    dir.mkdir("zeta");

    let assert = modern_cli().arg("list").arg(dir.path()).arg("--json").assert().success();

    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(
        value,
        json!([
            {"name": "zeta", "type": "directory", "size": 0},
            {"name": "a.txt", "type": "file", "size": 1},
            {"name": "b.txt", "type": "file", "size": 2}
        ])
    );
}

#[test]
fn table_goes_to_stderr() {
    let dir = TempDir::new("list");
    dir.write_file("keep.txt", "k");
    dir.write_file("skip.md", "s");

    modern_cli()
        .arg("list")
        .arg(dir.path())
        .args(["--pattern", "*.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("keep.txt")
                .and(predicate::str::contains("skip.md").not())
                .and(predicate::str::contains("Found 1 items matching '*.txt'")),
        );
}

#[test]
fn verbose_reports_total_size() {
    let dir = TempDir::new("list");
    dir.write_file("big.txt", "x".repeat(2048));

    modern_cli()
        .arg("list")
        .arg(dir.path())
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("Total size: 2,048 bytes"));
}

#[test]
fn missing_directory_is_a_usage_error() {
    let dir = TempDir::new("list");

    modern_cli()
        .arg("list")
        .arg(dir.path().join("nope"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn invalid_pattern_fails() {
    let dir = TempDir::new("list");

    modern_cli()
        .arg("list")
        .arg(dir.path())
        .args(["-p", "[abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_fails_the_listing() {
    let dir = TempDir::new("list");
    dir.write_file("real.txt", "x");
    std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("link.txt")).unwrap();

    modern_cli()
        .arg("list")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unexpected error").and(predicate::str::contains("link.txt")));
}

#[test]
fn list_help_goes_to_stdout() {
    modern_cli().arg("list").arg("--help").assert().success().stdout(predicate::str::contains("--json"));
}
