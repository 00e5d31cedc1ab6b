use crate::support::{ux4ai, workshop, write_file};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "products"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["--verbose", "products"])
        .assert()
        .success()
        .stderr(predicate::str::contains("open_workshop"));
}

#[test]
fn test_malformed_file_logged_as_warning() {
    let dir = workshop();
    write_file(dir.path(), "data/BBroken/gemini.json", "{");

    ux4ai()
        .current_dir(dir.path())
        .args(["--quiet", "products"])
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_log_json() {
    let dir = workshop();
    write_file(dir.path(), "data/BBroken/gemini.json", "{");

    ux4ai()
        .current_dir(dir.path())
        .args(["--log-json", "--quiet", "products"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"WARN\""));
}
