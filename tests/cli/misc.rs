use crate::support::ux4ai;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    ux4ai()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ux4ai"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("submit"));
}

#[test]
fn test_version_flag() {
    ux4ai()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ux4ai"));
}

#[test]
fn test_no_command() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `ux4ai --help`"));
}

#[test]
fn test_unknown_format() {
    ux4ai()
        .args(["--format", "yaml", "products"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_unknown_command_json_envelope() {
    ux4ai()
        .args(["--format", "json", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage_error"));
}
