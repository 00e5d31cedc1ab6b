use crate::support::{stdout_json, ux4ai, workshop};
use predicates::prelude::*;

#[test]
fn test_show_with_reference() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["show", "Gemini", "--reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (2 submissions)"))
        .stdout(predicate::str::contains("reference"))
        .stdout(predicate::str::is_match(r"conversational\s+4\.5\s+4\.5").unwrap());
}

#[test]
fn test_show_without_reference_file() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["show", "DeepL", "--reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no reference answer for DeepL)"));
}

#[test]
fn test_show_json_projection() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "Gemini", "--reference"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["dominant_role"], "AI is the product");
    let projection = &json["projection"];
    assert_eq!(
        projection["dimensions"],
        serde_json::json!([
            "conversational",
            "specialization",
            "autonomy",
            "accessibility",
            "explainability"
        ])
    );
    assert_eq!(
        projection["aggregate"],
        serde_json::json!([4.5, 1.0, 1.5, 0.0, 0.0])
    );
    assert_eq!(
        projection["reference"],
        serde_json::json!([4.5, 1.0, 4.0, 0.0, 0.0])
    );
}

#[test]
fn test_show_json_without_reference_flag() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "Gemini"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_json(&output)["projection"]["reference"].is_null());
}

#[test]
fn test_show_unknown_product() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["show", "Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("product not found: Nope"));
}

#[test]
fn test_show_unknown_product_json_error() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\": \"not_found\"").or(
            predicate::str::contains("\"type\":\"not_found\""),
        ));
}
