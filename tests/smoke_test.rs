//! Smoke tests for the sn CLI.
//!
//! These tests verify basic CLI functionality:
//! - `sn --version` outputs version info
//! - `sn --help` outputs help text
//! - `sn` (no args) prints usage and still succeeds
//! - unrecognized first words, flag-shaped or not, do nothing

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    TestEnv::new()
        .sn()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sn"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    TestEnv::new()
        .sn()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("done"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_no_args_prints_usage_and_succeeds() {
    let env = TestEnv::init();
    env.sn()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
    assert_eq!(env.read_db(), r#"{"notes":[]}"#);
}

#[test]
fn test_no_args_does_not_need_database() {
    TestEnv::new().sn().assert().success();
}

#[test]
fn test_unknown_command_is_silent_noop() {
    let env = TestEnv::init();
    env.sn()
        .args(["frobnicate", "whatever"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(env.read_db(), r#"{"notes":[]}"#);
}

#[test]
fn test_unknown_command_without_database_still_succeeds() {
    let env = TestEnv::new();
    env.sn().arg("remove").assert().success();
    assert!(!env.db_path().exists());
}

#[test]
fn test_help_word_is_silent_noop() {
    let env = TestEnv::init();
    env.sn()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(env.read_db(), r#"{"notes":[]}"#);
}

#[test]
fn test_unknown_flag_is_silent_noop() {
    let env = TestEnv::init();
    for args in [&["--bogus"][..], &["-x", "add", "nope"][..], &["--", "list"][..]] {
        env.sn()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
    assert_eq!(env.read_db(), r#"{"notes":[]}"#);
}
