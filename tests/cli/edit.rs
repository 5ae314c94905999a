//! Tests for the edit command.
//!
//! The editor is a shell snippet that receives the draft path as `$1`.

use crate::support::*;
use lockbox::Value;

#[test]
fn test_edit_creates_document() {
    let t = Test::with_key();

    let output = t.edit_with("printf 'added: yes\\n' >>");
    assert_success(&output);

    assert!(t.content_path().exists());
    assert_eq!(t.config().get("added").unwrap(), Some(&Value::from("yes")));
}

#[test]
fn test_edit_appends_to_existing() {
    let t = Test::with_key();
    t.config().write("existing: 1\n").unwrap();

    assert_success(&t.edit_with("printf 'added: 2\\n' >>"));

    let mut config = t.config();
    assert_eq!(config.get("existing").unwrap(), Some(&Value::Integer(1)));
    assert_eq!(config.get("added").unwrap(), Some(&Value::Integer(2)));
}

#[test]
fn test_edit_failing_editor_keeps_document() {
    let t = Test::with_key();
    t.config().write("existing: 1\n").unwrap();
    let before = t.raw_document();

    let output = t.edit_with("printf 'junk' >> \"$1\"; false");
    assert_failure(&output);
    assert_stderr_contains(&output, "edit aborted");
    assert_eq!(t.raw_document(), before);
}

#[test]
fn test_edit_rejects_unparseable_result() {
    let t = Test::with_key();
    t.config().write("existing: 1\n").unwrap();
    let before = t.raw_document();

    let output = t.edit_with("printf 'broken: [\\n' >>");
    assert_failure(&output);
    assert_stderr_contains(&output, "parse error");
    assert_eq!(t.raw_document(), before);
}

#[test]
fn test_edit_without_changes_leaves_file() {
    let t = Test::with_key();
    t.config().write("existing: 1\n").unwrap();
    let before = t.raw_document();

    assert_success(&t.edit_with("true"));
    assert_eq!(t.raw_document(), before);
}
