//! Class-wide summary against reference answers

use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::dimension::DimensionSet;
use crate::projection::{project, Projection};
use crate::record::ReferenceRecord;

/// One product in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub entity_name: String,
    pub sample_count: usize,
    pub has_reference: bool,
    pub projection: Projection,
    pub dominant_role: Option<String>,
    pub reference_role: Option<String>,
    pub risk_level_average: f64,
    pub reference_risk_level: Option<f64>,
    pub feedback_level_average: f64,
    pub reference_feedback_level: Option<f64>,
}

impl SummaryEntry {
    pub fn build(
        aggregate: &Aggregate,
        reference: Option<&ReferenceRecord>,
        dimensions: &DimensionSet,
    ) -> Self {
        let fields = reference.map(|r| &r.fields);
        Self {
            entity_name: aggregate.entity_name.clone(),
            sample_count: aggregate.sample_count,
            has_reference: reference.is_some(),
            projection: project(&aggregate.entity_name, Some(aggregate), reference, dimensions),
            dominant_role: aggregate.dominant_role().map(str::to_string),
            reference_role: fields.and_then(|f| f.role.clone()),
            risk_level_average: aggregate.risk_level_average,
            reference_risk_level: fields.and_then(|f| f.risk_level()),
            feedback_level_average: aggregate.feedback_level_average,
            reference_feedback_level: fields.and_then(|f| f.feedback_level()),
        }
    }
}

/// Every aggregated product, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryReport {
    pub entries: Vec<SummaryEntry>,
}
