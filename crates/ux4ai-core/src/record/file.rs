//! On-disk submission schema, as written by the capture side

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskBlock {
    pub level: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBlock {
    pub aspects: String,
    pub analytics_type_level: f64,
    pub analytics_type_explanation: String,
}

/// A complete submission file
///
/// Unlike [`super::Submission`], every block is present: the capture form always
/// fills all sliders, and empty text fields are written as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFile {
    pub username: String,
    pub product_name: String,
    pub ai_role: Option<String>,
    pub scores: BTreeMap<String, f64>,
    pub risk_of_adversarial_attacks: RiskBlock,
    pub continuous_learning_feedback_loops: FeedbackBlock,
}

impl SubmissionFile {
    /// Pretty-printed JSON document
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

}
