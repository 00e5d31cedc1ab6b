//! Per-student comparison against reference answers

use std::fmt;

use serde::{Serialize, Serializer};

use super::FieldValue;
use crate::dimension::DimensionSet;
use crate::projection::Projection;
use crate::record::{keys, ScoredFields};

/// A question in the comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonField {
    Role,
    Dimension(String),
    RiskLevel,
    RiskDescription,
    FeedbackAspects,
    FeedbackLevel,
    FeedbackExplanation,
}

impl ComparisonField {
    /// Table rows in presentation order for the given dimensions
    pub fn all(dimensions: &DimensionSet) -> Vec<ComparisonField> {
        let mut fields = vec![ComparisonField::Role];
        fields.extend(dimensions.ids().iter().cloned().map(ComparisonField::Dimension));
        fields.extend([
            ComparisonField::RiskLevel,
            ComparisonField::RiskDescription,
            ComparisonField::FeedbackAspects,
            ComparisonField::FeedbackLevel,
            ComparisonField::FeedbackExplanation,
        ]);
        fields
    }

    /// Stable identifier, matching the schema key where there is one
    pub fn id(&self) -> &str {
        match self {
            ComparisonField::Role => keys::AI_ROLE,
            ComparisonField::Dimension(d) => d.as_str(),
            ComparisonField::RiskLevel => "risk_level",
            ComparisonField::RiskDescription => "risk_description",
            ComparisonField::FeedbackAspects => "feedback_aspects",
            ComparisonField::FeedbackLevel => keys::FEEDBACK_LEVEL,
            ComparisonField::FeedbackExplanation => keys::FEEDBACK_EXPLANATION,
        }
    }

    pub fn value(&self, fields: &ScoredFields) -> FieldValue {
        match self {
            ComparisonField::Role => fields.role.as_deref().into(),
            ComparisonField::Dimension(d) => fields.score(d).into(),
            ComparisonField::RiskLevel => fields.risk_level().into(),
            ComparisonField::RiskDescription => fields.risk_description().into(),
            ComparisonField::FeedbackAspects => fields.feedback_aspects().into(),
            ComparisonField::FeedbackLevel => fields.feedback_level().into(),
            ComparisonField::FeedbackExplanation => fields.feedback_explanation().into(),
        }
    }
}

impl fmt::Display for ComparisonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for ComparisonField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Student answer vs reference answer for one question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub field: ComparisonField,
    pub submitted: FieldValue,
    pub reference: FieldValue,
}

/// Build the comparison table for one submission
pub fn compare_fields(
    submitted: &ScoredFields,
    reference: Option<&ScoredFields>,
    dimensions: &DimensionSet,
) -> Vec<ComparisonRow> {
    ComparisonField::all(dimensions)
        .into_iter()
        .map(|field| {
            let submitted_value = field.value(submitted);
            let reference_value = reference.map_or(FieldValue::Missing, |r| field.value(r));
            ComparisonRow {
                field,
                submitted: submitted_value,
                reference: reference_value,
            }
        })
        .collect()
}

/// One product section of a student's report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentEntry {
    pub entity_name: String,
    pub has_reference: bool,
    pub rows: Vec<ComparisonRow>,
    pub projection: Projection,
}

/// Everything one student submitted, compared to the references
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReport {
    pub submitter_id: String,
    pub entries: Vec<StudentEntry>,
}
