use crate::support::{ux4ai, workshop};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_submit_writes_record() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .args([
            "submit",
            "--name",
            "jane van doe",
            "--product",
            "  Google Lens ",
            "--role",
            "AI is the product",
            "--score",
            "conversational=4",
            "--score",
            "personalization=2.5",
            "--risk-level",
            "3",
            "--risk-description",
            "spoofed images",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved rating of Google Lens for JDoe"));

    let path = dir.path().join("data/JDoe/google_lens.json");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["username"], "JDoe");
    assert_eq!(json["product_name"], "Google Lens");
    assert_eq!(json["scores"]["specialization"], 2.5);
    assert_eq!(json["risk_of_adversarial_attacks"]["level"], 3.0);

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google Lens (1 submission)"));
}

#[test]
fn test_submit_overwrites_same_pair() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args([
            "submit",
            "--name",
            "John Doe",
            "--product",
            "Gemini",
            "--score",
            "conversational=1",
        ])
        .assert()
        .success();

    ux4ai()
        .current_dir(dir.path())
        .args(["--format", "records", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P \"Gemini\" samples=2"))
        .stdout(predicate::str::contains(
            "D \"Gemini\" conversational avg=3.0 supplied=2",
        ));
}

#[test]
fn test_submit_rejects_single_name() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .args(["submit", "--name", "Jane", "--product", "Gemini"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("full name"));

    assert!(!dir.path().join("data").exists());
}

#[test]
fn test_submit_rejects_out_of_range() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .args([
            "submit",
            "--name",
            "Jane Doe",
            "--product",
            "Gemini",
            "--score",
            "autonomy=7",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid autonomy"));
}

#[test]
fn test_submit_rejects_unknown_dimension() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .args([
            "submit",
            "--name",
            "Jane Doe",
            "--product",
            "Gemini",
            "--score",
            "vibes=3",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid dimension: vibes"));
}

#[test]
fn test_submit_rejects_malformed_score() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .args([
            "submit",
            "--name",
            "Jane Doe",
            "--product",
            "Gemini",
            "--score",
            "autonomy",
        ])
        .assert()
        .code(2);
}
