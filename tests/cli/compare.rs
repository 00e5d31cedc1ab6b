use crate::support::{stdout_json, ux4ai, workshop};
use predicates::prelude::*;

#[test]
fn test_compare_human() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["compare", "Gemini", "DeepL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (n=2)"))
        .stdout(predicate::str::contains("DeepL (n=1)"))
        .stdout(predicate::str::contains("(ref)").not());
}

#[test]
fn test_compare_with_reference_and_no_average() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["compare", "Gemini", "DeepL", "--reference", "--no-average"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (ref)"))
        .stdout(predicate::str::contains("(n=").not())
        .stdout(predicate::str::contains("(no reference answer for DeepL)"));
}

#[test]
fn test_compare_unknown_product_is_zero() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "compare", "Gemini", "Unknown Product"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json[0]["entity_name"], "Gemini");
    assert_eq!(json[1]["entity_name"], "Unknown Product");
    assert_eq!(json[1]["sample_count"], 0);
    assert_eq!(
        json[1]["aggregate"],
        serde_json::json!([0.0, 0.0, 0.0, 0.0, 0.0])
    );
    assert!(json[1].get("reference").is_none());
}

#[test]
fn test_compare_json_no_average_omits_series() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "compare",
            "Gemini",
            "DeepL",
            "--reference",
            "--no-average",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert!(json[0].get("aggregate").is_none());
    assert_eq!(
        json[0]["reference"],
        serde_json::json!([4.5, 1.0, 4.0, 0.0, 0.0])
    );
}
