//! Submission and reference records
//!
//! Both record kinds share the scored part of the on-disk schema
//! ([`ScoredFields`]). Loosely typed JSON is resolved into these structures
//! exactly once, in [`parse`]; nothing downstream touches raw JSON.

pub mod file;
pub mod parse;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

pub use file::SubmissionFile;
pub use parse::{parse_record, ParsedRecord};

/// Top-level JSON keys of the submission schema
pub mod keys {
    pub const USERNAME: &str = "username";
    pub const PRODUCT_NAME: &str = "product_name";
    pub const AI_ROLE: &str = "ai_role";
    pub const SCORES: &str = "scores";
    pub const RISK: &str = "risk_of_adversarial_attacks";
    pub const RISK_LEVEL: &str = "level";
    pub const RISK_DESCRIPTION: &str = "description";
    pub const FEEDBACK: &str = "continuous_learning_feedback_loops";
    pub const FEEDBACK_ASPECTS: &str = "aspects";
    pub const FEEDBACK_LEVEL: &str = "analytics_type_level";
    pub const FEEDBACK_EXPLANATION: &str = "analytics_type_explanation";
}

/// Risk of adversarial attacks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: Option<f64>,
    pub description: Option<String>,
}

/// Continuous learning and feedback loops
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedbackLoopAssessment {
    pub aspects: Option<String>,
    pub level: Option<f64>,
    pub explanation: Option<String>,
}

/// The scored fields shared by submissions and reference records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredFields {
    /// Categorical role, kept verbatim
    pub role: Option<String>,
    /// Scores keyed by canonical dimension id
    pub scores: BTreeMap<String, f64>,
    pub risk: Option<RiskAssessment>,
    pub feedback: Option<FeedbackLoopAssessment>,
}

impl ScoredFields {
    /// Score for a canonical dimension, if supplied
    pub fn score(&self, dimension: &str) -> Option<f64> {
        self.scores.get(dimension).copied()
    }

    pub fn risk_level(&self) -> Option<f64> {
        self.risk.as_ref().and_then(|r| r.level)
    }

    pub fn risk_description(&self) -> Option<&str> {
        self.risk.as_ref().and_then(|r| r.description.as_deref())
    }

    pub fn feedback_level(&self) -> Option<f64> {
        self.feedback.as_ref().and_then(|f| f.level)
    }

    pub fn feedback_aspects(&self) -> Option<&str> {
        self.feedback.as_ref().and_then(|f| f.aspects.as_deref())
    }

    pub fn feedback_explanation(&self) -> Option<&str> {
        self.feedback.as_ref().and_then(|f| f.explanation.as_deref())
    }
}

/// One participant's evaluation of one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub submitter_id: String,
    pub entity_name: String,
    #[serde(flatten)]
    pub fields: ScoredFields,
    /// Where the record was read from, when it came from a file tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// An instructor's authoritative evaluation of one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRecord {
    /// Product name as written inside the file, if any
    pub entity_name: Option<String>,
    #[serde(flatten)]
    pub fields: ScoredFields,
}
