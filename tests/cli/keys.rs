//! Tests for key generation.

use std::fs;

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_generate_key_prints_hex() {
    let t = Test::new();

    t.cmd()
        .arg("generate-key")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{32}\n$").unwrap());

    assert!(!t.key_path().exists());
}

#[test]
fn test_generate_key_write() {
    let t = Test::new();

    let output = t.generate_key();
    assert_success(&output);
    assert_stderr_contains(&output, "wrote key");

    let key = fs::read_to_string(t.key_path()).unwrap();
    assert_eq!(key.trim().len(), 32);
}

#[cfg(unix)]
#[test]
fn test_generated_key_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    assert_success(&t.generate_key());

    let mode = fs::metadata(t.key_path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_generate_key_refuses_overwrite() {
    let t = Test::with_key();
    let before = fs::read_to_string(t.key_path()).unwrap();

    let output = t.generate_key();
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(fs::read_to_string(t.key_path()).unwrap(), before);
}

#[test]
fn test_key_flag_overrides_path() {
    let t = Test::new();

    t.cmd()
        .args(["generate-key", "--write", "--key", "secrets/other.key"])
        .assert()
        .success();

    assert!(t.dir.path().join("secrets/other.key").exists());
    assert!(!t.key_path().exists());
}
