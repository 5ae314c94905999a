//! Tests for show and get.

use crate::support::*;
use predicates::prelude::*;

fn seeded() -> Test {
    let t = Test::with_key();
    t.config()
        .write("database:\n  host: db.internal\n  port: 5432\nhosts:\n  - a\n  - b\n")
        .unwrap();
    t
}

#[test]
fn test_show_prints_plaintext() {
    let t = seeded();

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "host: db.internal");
}

#[test]
fn test_show_missing_document_is_empty() {
    let t = Test::with_key();

    t.cmd().arg("show").assert().success().stdout("");
}

#[test]
fn test_get_scalar() {
    let t = seeded();

    t.cmd()
        .args(["get", "database", "host"])
        .assert()
        .success()
        .stdout("db.internal\n");

    t.cmd()
        .args(["get", "database", "port"])
        .assert()
        .success()
        .stdout("5432\n");
}

#[test]
fn test_get_mapping_uses_format() {
    let t = seeded();

    let output = t.get(&["database"]);
    assert_success(&output);
    assert_stdout_contains(&output, "host: db.internal");
}

#[test]
fn test_get_sequence_item() {
    let t = seeded();

    t.cmd()
        .args(["get", "hosts", "1"])
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn test_get_missing_path_fails() {
    let t = seeded();

    t.cmd()
        .args(["get", "database", "password"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no value at database.password"));
}

#[test]
fn test_env_key_is_used() {
    let t = Test::new();
    let key = t.write_key();
    t.config().write("token: abc\n").unwrap();
    std::fs::remove_file(t.key_path()).unwrap();

    t.cmd()
        .args(["get", "token"])
        .env("LOCKBOX_MASTER_KEY", &key)
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_options_file() {
    let t = Test::with_key();
    let mut config = t.json_config();
    config.set("api", "from-json").unwrap();
    config.save().unwrap();

    std::fs::write(
        t.dir.path().join("lockbox.toml"),
        "config_path = \"config/credentials.json.enc\"\n\
         key_path = \"config/master.key\"\n\
         serializer = \"json\"\n",
    )
    .unwrap();

    t.cmd()
        .args(["get", "api"])
        .assert()
        .success()
        .stdout("from-json\n");
}
