//! Presentation-neutral report models
//!
//! Reports are what document generators consume: per-student comparison
//! tables and per-product summaries against the reference answers. They hold
//! plain values only; wording and layout belong to the renderer.

pub mod student;
pub mod summary;

use std::fmt;

use serde::Serialize;

pub use student::{compare_fields, ComparisonField, ComparisonRow, StudentEntry, StudentReport};
pub use summary::{SummaryEntry, SummaryReport};

/// One answer cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Missing,
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Number)
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Missing, |s| FieldValue::Text(s.to_string()))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => f.write_str(&format_level(*n)),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Missing => f.write_str("N/A"),
        }
    }
}

/// Format a score with at least one decimal (`4` → `4.0`, `4.25` → `4.25`)
pub fn format_level(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
