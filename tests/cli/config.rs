use crate::support::{ux4ai, workshop, write_file};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_data_dir() {
    let dir = workshop();
    fs::rename(dir.path().join("data"), dir.path().join("ratings")).unwrap();
    write_file(dir.path(), "ux4ai.toml", "data_dir = \"ratings\"\n");

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (2 submissions)"));
}

#[test]
fn test_explicit_config_path() {
    let dir = workshop();
    write_file(
        dir.path(),
        "conf/custom.toml",
        "reference_dir = \"elsewhere\"\n",
    );

    ux4ai()
        .current_dir(dir.path())
        .args(["--config", "conf/custom.toml", "show", "Gemini", "--reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no reference answer for Gemini)"));
}

#[test]
fn test_duplicate_dimension_is_config_error() {
    let dir = workshop();
    write_file(
        dir.path(),
        "ux4ai.toml",
        "dimensions = [\"conversational\", \"conversational\"]\n",
    );

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_alias_shadowing_dimension_is_config_error() {
    let dir = workshop();
    write_file(
        dir.path(),
        "ux4ai.toml",
        "[dimension_aliases]\nautonomy = \"conversational\"\n",
    );

    ux4ai()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .code(2);
}

#[test]
fn test_custom_dimensions() {
    let dir = workshop();
    write_file(
        dir.path(),
        "ux4ai.toml",
        "dimensions = [\"autonomy\", \"conversational\"]\n\n[dimension_aliases]\n",
    );

    ux4ai()
        .current_dir(dir.path())
        .args(["--format", "records", "show", "Gemini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D \"Gemini\" autonomy avg=1.5"))
        .stdout(predicate::str::contains("specialization").not());
}

#[test]
fn test_unknown_config_key() {
    let dir = workshop();
    write_file(dir.path(), "ux4ai.toml", "colour = \"blue\"\n");

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"));
}
