use crate::support::{stdout_json, ux4ai, workshop};
use predicates::prelude::*;

#[test]
fn test_summary_human() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "role: AI is the product (reference: AI is the product)",
        ))
        .stdout(predicate::str::contains(
            "risk of adversarial attacks: 3.5 / 5 (reference: 5.0 / 5)",
        ))
        .stdout(predicate::str::contains("(no reference answer for DeepL)"));
}

#[test]
fn test_summary_json() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["entity_name"], "DeepL");
    assert_eq!(entries[0]["has_reference"], false);
    assert!(entries[0]["reference_risk_level"].is_null());

    assert_eq!(entries[1]["entity_name"], "Gemini");
    assert_eq!(entries[1]["reference_feedback_level"], 3.0);
    assert_eq!(entries[1]["feedback_level_average"], 1.0);
}
