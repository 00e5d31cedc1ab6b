use crate::support::{stdout_json, ux4ai, workshop, write_file};
use predicates::prelude::*;

#[test]
fn test_students_human() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .arg("students")
        .assert()
        .success()
        .stdout(predicate::str::contains("== ASmith =="))
        .stdout(predicate::str::contains("== JDoe =="))
        .stdout(predicate::str::contains("(no reference answer)"))
        .stdout(predicate::str::contains("prompt injection"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_students_single_json() {
    let dir = workshop();

    let output = ux4ai()
        .current_dir(dir.path())
        .args(["--format", "json", "students", "--student", "JDoe"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["submitter_id"], "JDoe");

    let entry = &reports[0]["entries"][0];
    assert_eq!(entry["entity_name"], "Gemini");
    assert_eq!(entry["has_reference"], true);

    let rows = entry["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0]["field"], "ai_role");
    assert_eq!(rows[1]["field"], "conversational");
    assert_eq!(rows[1]["submitted"], 4.0);
    assert_eq!(rows[1]["reference"], 4.5);
    assert_eq!(entry["projection"]["aggregate"][0], 4.0);
}

#[test]
fn test_students_unknown() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["students", "--student", "Nobody"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("student not found: Nobody"));
}

#[test]
fn test_students_records() {
    let dir = workshop();

    ux4ai()
        .current_dir(dir.path())
        .args(["--format", "records", "students", "--student", "ASmith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S ASmith products=2"))
        .stdout(predicate::str::contains(
            "F ASmith \"DeepL\" conversational answer=\"1.0\" reference=-",
        ));
}

#[test]
fn test_students_notes_unreadable_reference() {
    let dir = workshop();
    write_file(dir.path(), "solutions/deepl.json", "not json");

    ux4ai()
        .current_dir(dir.path())
        .arg("students")
        .assert()
        .success()
        .stdout(predicate::str::contains("== ASmith =="))
        .stderr(predicate::str::contains(
            "note: 1 problem(s) found while reading records; run `ux4ai scan` for details",
        ));
}
