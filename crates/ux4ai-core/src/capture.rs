//! Validation and normalization for new submissions
//!
//! This is the capture side of the workshop: it turns a participant's raw
//! form input into a [`SubmissionFile`] ready to be written.

use std::collections::BTreeMap;

use crate::dimension::DimensionSet;
use crate::error::Result;
use crate::record::file::{FeedbackBlock, RiskBlock};
use crate::record::SubmissionFile;
use crate::{bail_invalid, bail_usage};

/// Lowest allowed score or level
pub const MIN_LEVEL: f64 = 0.0;
/// Highest allowed score or level
pub const MAX_LEVEL: f64 = 5.0;

/// Raw form input for one rating
#[derive(Debug, Clone, Default)]
pub struct CaptureInput {
    pub full_name: String,
    pub product_name: String,
    pub ai_role: Option<String>,
    /// Raw dimension keys (canonical or legacy) with their scores
    pub scores: Vec<(String, f64)>,
    pub risk_level: f64,
    pub risk_description: String,
    pub feedback_aspects: String,
    pub feedback_level: f64,
    pub feedback_explanation: String,
}

/// Derive the submitter id from a full name
///
/// The name needs at least two whitespace-separated, purely alphabetic
/// parts. The id is the first part's initial (uppercased) followed by the
/// last part capitalised: `"jane van doe"` → `"JDoe"`.
pub fn format_submitter_id(full_name: &str) -> Result<String> {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    if parts.len() < 2 || !parts.iter().all(|p| p.chars().all(char::is_alphabetic)) {
        bail_usage!("please enter your full name (first and last name, letters only)");
    }

    let mut id: String = parts[0].chars().take(1).flat_map(char::to_uppercase).collect();
    id.push_str(&capitalize(parts[parts.len() - 1]));
    Ok(id)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn check_level(context: &str, value: f64) -> Result<f64> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&value) {
        bail_invalid!(context, format!("{} (expected {}..={})", value, MIN_LEVEL, MAX_LEVEL));
    }
    Ok(value)
}

/// Validate form input and build the file to write
pub fn build_submission(input: &CaptureInput, dimensions: &DimensionSet) -> Result<SubmissionFile> {
    let username = format_submitter_id(&input.full_name)?;

    let product_name = input.product_name.trim();
    if product_name.is_empty() {
        bail_usage!("please specify the product name");
    }

    // A canonical key beats its legacy alias, whatever the input order
    let mut scores = BTreeMap::new();
    let mut from_alias = Vec::new();
    for (key, value) in &input.scores {
        let Some(canonical) = dimensions.canonicalize(key) else {
            bail_invalid!("dimension", key);
        };
        let value = check_level(canonical, *value)?;
        if dimensions.is_alias(key) {
            from_alias.push((canonical.to_string(), value));
        } else {
            scores.insert(canonical.to_string(), value);
        }
    }
    for (canonical, value) in from_alias {
        scores.entry(canonical).or_insert(value);
    }

    Ok(SubmissionFile {
        username,
        product_name: product_name.to_string(),
        ai_role: input
            .ai_role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string),
        scores,
        risk_of_adversarial_attacks: RiskBlock {
            level: check_level("risk level", input.risk_level)?,
            description: input.risk_description.clone(),
        },
        continuous_learning_feedback_loops: FeedbackBlock {
            aspects: input.feedback_aspects.clone(),
            analytics_type_level: check_level("analytics type level", input.feedback_level)?,
            analytics_type_explanation: input.feedback_explanation.clone(),
        },
    })
}
