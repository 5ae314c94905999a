//! Tests for error reporting and CLI flags.

use std::fs;

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate-key"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_missing_key_has_hint() {
    let t = Test::new();

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "✗ missing encryption key");
    assert_stderr_contains(&output, "LOCKBOX_MASTER_KEY");
    assert_stderr_contains(&output, "lockbox generate-key --write");
}

#[test]
fn test_wrong_key_fails_decryption() {
    let t = Test::with_key();
    t.config().write("a: 1\n").unwrap();
    t.write_key();

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_corrupt_document_is_reported() {
    let t = Test::with_key();
    fs::write(t.content_path(), "not-an-envelope").unwrap();

    let output = t.get(&["a"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed envelope");
}

#[test]
fn test_unknown_format_rejected() {
    let t = Test::with_key();

    t.cmd()
        .args(["show", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown serializer"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_key();

    t.cmd()
        .args(["--verbose", "show"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("key resolved from key file"));
}
