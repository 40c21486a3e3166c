use predicates::prelude::*;

use crate::common::{TempDir, modern_cli};

#[test]
fn writes_uppercased_copy() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let report = input.write_file("report.txt", "Quarterly numbers");

    modern_cli()
        .arg("process")
        .arg(&report)
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Successfully processed 1 file(s)"));

    assert_eq!(output.file_names(), ["report_upper.txt"]);
    assert_eq!(output.read("report_upper.txt"), "QUARTERLY NUMBERS");
}

#[test]
fn lower_transform_with_yes() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let a = input.write_file("A.TXT", "ABC");
    let b = input.write_file("b.md", "DeF");

    modern_cli()
        .args(["process", "--transform", "lower", "--yes", "-o"])
        .arg(output.path())
        .arg(&a)
        .arg(&b)
        .assert()
        .success();

    assert_eq!(output.file_names(), ["A_lower.TXT", "b_lower.md"]);
    assert_eq!(output.read("b_lower.md"), "def");
}

#[test]
fn unknown_transform_copies_unchanged() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let file = input.write_file("notes.txt", "Mixed Case");

    modern_cli()
        .args(["process", "-t", "reverse", "-o"])
        .arg(output.path())
        .arg(&file)
        .assert()
        .success();

    assert_eq!(output.read("notes_reverse.txt"), "Mixed Case");
}

#[test]
fn dry_run_writes_nothing() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let a = input.write_file("a.txt", "a");
    let b = input.write_file("b.txt", "b");

    modern_cli()
        .args(["process", "--dry-run", "-o"])
        .arg(output.path())
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("DRY RUN")
                .and(predicate::str::contains("Would process: a.txt → upper"))
                .and(predicate::str::contains("Would process: b.txt → upper")),
        );

    assert!(output.file_names().is_empty());
}

#[test]
fn declining_confirmation_exits_130() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let a = input.write_file("a.txt", "a");
    let b = input.write_file("b.txt", "b");

    modern_cli()
        .arg("process")
        .arg("-o")
        .arg(output.path())
        .arg(&a)
        .arg(&b)
        .write_stdin("n\n")
        .assert()
        .code(130)
        .stderr(predicate::str::contains("Aborted by user"));

    assert!(output.file_names().is_empty());
}

#[test]
fn closed_stdin_declines() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let a = input.write_file("a.txt", "a");
    let b = input.write_file("b.txt", "b");

    modern_cli()
        .arg("process")
        .arg("-o")
        .arg(output.path())
        .arg(&a)
        .arg(&b)
        .write_stdin("")
        .assert()
        .code(130);

    assert!(output.file_names().is_empty());
}

#[test]
fn accepting_confirmation_processes_all() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let a = input.write_file("a.txt", "a");
    let b = input.write_file("b.txt", "b");

    modern_cli()
        .arg("process")
        .arg("-o")
        .arg(output.path())
        .arg(&a)
        .arg(&b)
        .write_stdin("yes\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("About to process 2 files"));

    assert_eq!(output.file_names(), ["a_upper.txt", "b_upper.txt"]);
}

#[test]
fn one_unreadable_file_fails_the_run() {
    let input = TempDir::new("in");
    let output = TempDir::new("out");
    let good = input.write_file("good.txt", "fine");
    let bad = input.write_file("bad.bin", [0xffu8, 0xfe, 0x00, 0xc3]);
    let other = input.write_file("other.txt", "also fine");

    modern_cli()
        .args(["process", "-y", "-o"])
        .arg(output.path())
        .arg(&good)
        .arg(&bad)
        .arg(&other)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Some files failed").and(predicate::str::contains("bad.bin")),
        );

    assert_eq!(output.file_names(), ["good_upper.txt", "other_upper.txt"]);
}

#[test]
fn missing_input_is_rejected_at_parse_time() {
    let input = TempDir::new("in");

    modern_cli()
        .arg("process")
        .arg(input.path().join("absent.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn directory_input_is_rejected_at_parse_time() {
    let input = TempDir::new("in");

    modern_cli().arg("process").arg(input.path()).assert().code(2);
}
