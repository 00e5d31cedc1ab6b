use crate::support::{stdout_json, ux4ai, workshop, write_file};
use predicates::prelude::*;

#[test]
fn test_scan_reports_malformed_file() {
    let dir = workshop();
    write_file(dir.path(), "data/BBroken/gemini.json", "{\"product_name\": ");

    ux4ai()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("JDoe"))
        .stdout(predicate::str::contains("malformed"))
        .stdout(predicate::str::contains("BBroken"));
}

#[test]
fn test_scan_json() {
    let dir = workshop();
    write_file(dir.path(), "data/BBroken/gemini.json", "[1, 2, 3]");
    write_file(dir.path(), "data/Nameless/thing.json", "{\"scores\": {}}");

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "scan"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["records"].as_array().unwrap().len(), 3);
    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["kind"], "malformed");
}

#[test]
fn test_malformed_file_does_not_stop_aggregation() {
    let dir = workshop();
    write_file(dir.path(), "data/BBroken/gemini.json", "not json");

    ux4ai()
        .current_dir(dir.path())
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gemini (2 submissions)"))
        .stderr(predicate::str::contains("run `ux4ai scan` for details"));
}

#[test]
fn test_scan_missing_root() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["--data-dir", "nowhere", "--format", "records", "scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted=0 diagnostics=1"))
        .stdout(predicate::str::contains("E missing_root"));
}
