use crate::support::{stdout_json, ux4ai, workshop};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_products_human() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (2 submissions)"))
        .stdout(predicate::str::contains("DeepL (1 submission)"))
        .stdout(predicate::str::contains("role: AI is the product (2)"))
        .stdout(predicate::str::contains("risk of adversarial attacks: 3.5 / 5"));
}

#[test]
fn test_products_json_averages() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "products"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let products = json.as_array().unwrap();
    assert_eq!(products.len(), 2);

    let gemini = &products[1];
    assert_eq!(gemini["entity_name"], "Gemini");
    assert_eq!(gemini["sample_count"], 2);
    assert_eq!(gemini["dimension_averages"]["conversational"], 4.5);
    // Sparse dimensions still divide by the record count
    assert_eq!(gemini["dimension_averages"]["autonomy"], 1.5);
    assert_eq!(gemini["dimension_averages"]["specialization"], 1.0);
    assert_eq!(gemini["dimension_supplied"]["autonomy"], 1);
    assert_eq!(gemini["role_frequency"]["AI is the product"], 2);
    assert_eq!(gemini["feedback_level_average"], 1.0);
}

#[test]
fn test_products_records() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["--format", "records", "products"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H ux4ai=1 records=1 mode=products products=2",
        ))
        .stdout(predicate::str::contains("P \"Gemini\" samples=2"))
        .stdout(predicate::str::contains(
            "D \"Gemini\" conversational avg=4.5 supplied=2",
        ));
}

#[test]
fn test_products_missing_data_dir() {
    let dir = tempdir().unwrap();

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("No submissions found"));
}

#[test]
fn test_products_data_dir_flag() {
    let dir = workshop();
    let other = tempdir().unwrap();

    ux4ai()
        .current_dir(other.path())
        .args(["--data-dir"])
        .arg(dir.path().join("data"))
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (2 submissions)"));
}

#[test]
fn test_products_data_dir_env() {
    let dir = workshop();
    let other = tempdir().unwrap();

    ux4ai()
        .current_dir(other.path())
        .env("UX4AI_DATA_DIR", dir.path().join("data"))
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("DeepL (1 submission)"));
}
