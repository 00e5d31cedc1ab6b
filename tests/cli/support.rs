use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Get a Command for ux4ai
pub fn ux4ai() -> Command {
    cargo_bin_cmd!("ux4ai")
}

/// Write a file, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A workshop directory with two Gemini ratings, one DeepL rating and a
/// reference answer for Gemini only
pub fn workshop() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_file(
        root,
        "data/JDoe/gemini.json",
        r#"{
            "username": "JDoe",
            "product_name": "Gemini",
            "ai_role": "AI is the product",
            "scores": {"conversational": 4.0, "autonomy": 3.0},
            "risk_of_adversarial_attacks": {"level": 3.0, "description": "prompt injection"},
            "continuous_learning_feedback_loops": {
                "aspects": "thumbs up",
                "analytics_type_level": 2.0,
                "analytics_type_explanation": "ratings"
            }
        }"#,
    );
    write_file(
        root,
        "data/ASmith/gemini.json",
        r#"{
            "username": "ASmith",
            "product_name": "Gemini",
            "ai_role": "AI is the product",
            "scores": {"conversational": 5.0, "personalization": 2.0},
            "risk_of_adversarial_attacks": {"level": 4.0, "description": "jailbreak"}
        }"#,
    );
    write_file(
        root,
        "data/ASmith/deepl.json",
        r#"{
            "username": "ASmith",
            "product_name": "DeepL",
            "ai_role": "AI assists the product",
            "scores": {"conversational": 1.0}
        }"#,
    );
    write_file(
        root,
        "solutions/gemini.json",
        r#"{
            "product_name": "Gemini",
            "ai_role": "AI is the product",
            "scores": {"conversational": 4.5, "autonomy": 4.0, "specialization": 1.0},
            "risk_of_adversarial_attacks": {"level": 5.0, "description": "many"},
            "continuous_learning_feedback_loops": {"analytics_type_level": 3.0}
        }"#,
    );

    dir
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
