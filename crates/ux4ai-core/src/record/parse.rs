//! JSON → typed record resolution
//!
//! Only a document that is not a JSON object is fatal to a record. Individual
//! fields with unusable values are dropped with an `InvalidField` diagnostic
//! and the rest of the record survives.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{keys, FeedbackLoopAssessment, RiskAssessment, ScoredFields};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::dimension::DimensionSet;

/// Raw top-level shape; every field is optional and loosely typed
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(default)]
    username: Option<Value>,
    #[serde(default)]
    product_name: Option<Value>,
    #[serde(default)]
    ai_role: Option<Value>,
    #[serde(default)]
    scores: Option<Value>,
    #[serde(default)]
    risk_of_adversarial_attacks: Option<Value>,
    #[serde(default)]
    continuous_learning_feedback_loops: Option<Value>,
}

/// A record with its identity fields still optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecord {
    pub username: Option<String>,
    pub product_name: Option<String>,
    pub fields: ScoredFields,
}

/// Parse one record file's contents
///
/// Returns `Err` only when `text` is not a JSON object.
pub fn parse_record(
    text: &str,
    path: &Path,
    dimensions: &DimensionSet,
    diagnostics: &mut Diagnostics,
) -> Result<ParsedRecord, serde_json::Error> {
    // Going through a map first keeps JSON arrays from matching the struct
    // positionally.
    let object: Map<String, Value> = serde_json::from_str(text)?;
    let raw = RawRecord::deserialize(Value::Object(object))?;
    let mut reader = FieldReader { path, diagnostics };

    let fields = ScoredFields {
        role: reader.text(keys::AI_ROLE, raw.ai_role),
        scores: reader.scores(raw.scores, dimensions),
        risk: reader
            .object(keys::RISK, raw.risk_of_adversarial_attacks)
            .map(|obj| RiskAssessment {
                level: reader.number(keys::RISK_LEVEL, obj.get(keys::RISK_LEVEL).cloned()),
                description: reader.text(
                    keys::RISK_DESCRIPTION,
                    obj.get(keys::RISK_DESCRIPTION).cloned(),
                ),
            }),
        feedback: reader
            .object(keys::FEEDBACK, raw.continuous_learning_feedback_loops)
            .map(|obj| FeedbackLoopAssessment {
                aspects: reader.text(
                    keys::FEEDBACK_ASPECTS,
                    obj.get(keys::FEEDBACK_ASPECTS).cloned(),
                ),
                level: reader.number(keys::FEEDBACK_LEVEL, obj.get(keys::FEEDBACK_LEVEL).cloned()),
                explanation: reader.text(
                    keys::FEEDBACK_EXPLANATION,
                    obj.get(keys::FEEDBACK_EXPLANATION).cloned(),
                ),
            }),
    };

    Ok(ParsedRecord {
        username: reader.text(keys::USERNAME, raw.username),
        product_name: reader.text(keys::PRODUCT_NAME, raw.product_name),
        fields,
    })
}

struct FieldReader<'a> {
    path: &'a Path,
    diagnostics: &'a mut Diagnostics,
}

impl FieldReader<'_> {
    fn invalid(&mut self, field: &str, value: &Value) {
        self.diagnostics.push(
            DiagnosticKind::InvalidField,
            self.path,
            format!("field '{}' has unusable value {}", field, value),
        );
    }

    /// Non-empty string; empty strings and `null` count as absent
    fn text(&mut self, field: &str, value: Option<Value>) -> Option<String> {
        match value? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            other => {
                self.invalid(field, &other);
                None
            }
        }
    }

    fn number(&mut self, field: &str, value: Option<Value>) -> Option<f64> {
        match value? {
            Value::Null => None,
            Value::Number(n) => n.as_f64(),
            other => {
                self.invalid(field, &other);
                None
            }
        }
    }

    /// Nested object; an empty object counts as absent
    fn object(&mut self, field: &str, value: Option<Value>) -> Option<Map<String, Value>> {
        match value? {
            Value::Null => None,
            Value::Object(obj) if obj.is_empty() => None,
            Value::Object(obj) => Some(obj),
            other => {
                self.invalid(field, &other);
                None
            }
        }
    }

    /// Scores keyed by canonical dimension id
    ///
    /// Unknown keys are dropped. A canonical key beats its legacy alias when
    /// both are present.
    fn scores(&mut self, value: Option<Value>, dimensions: &DimensionSet) -> BTreeMap<String, f64> {
        let mut scores = BTreeMap::new();
        let Some(obj) = self.object(keys::SCORES, value) else {
            return scores;
        };

        let mut from_alias: Vec<(String, f64)> = Vec::new();
        for (key, raw) in obj {
            let Some(canonical) = dimensions.canonicalize(&key) else {
                tracing::debug!(path = %self.path.display(), key = %key, "ignoring unknown dimension");
                continue;
            };
            let field = format!("{}.{}", keys::SCORES, key);
            let Some(score) = self.number(&field, Some(raw)) else {
                continue;
            };
            if dimensions.is_alias(&key) {
                from_alias.push((canonical.to_string(), score));
            } else {
                scores.insert(canonical.to_string(), score);
            }
        }

        for (canonical, score) in from_alias {
            scores.entry(canonical).or_insert(score);
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (ParsedRecord, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let record = parse_record(
            text,
            Path::new("data/JDoe/gemini.json"),
            &DimensionSet::standard(),
            &mut diagnostics,
        )
        .unwrap();
        (record, diagnostics)
    }

    #[test]
    fn test_parse_full_record() {
        let (record, diagnostics) = parse(
            r#"{
                "username": "JDoe",
                "product_name": "Gemini",
                "ai_role": "AI is the product",
                "scores": {"conversational": 4.5, "specialization": 3, "autonomy": 2.5,
                           "accessibility": 5, "explainability": 1.0},
                "risk_of_adversarial_attacks": {"level": 3.5, "description": "prompt injection"},
                "continuous_learning_feedback_loops": {
                    "aspects": "thumbs up/down",
                    "analytics_type_level": 2.0,
                    "analytics_type_explanation": "descriptive"
                }
            }"#,
        );

        assert!(diagnostics.is_empty());
        assert_eq!(record.username.as_deref(), Some("JDoe"));
        assert_eq!(record.product_name.as_deref(), Some("Gemini"));
        assert_eq!(record.fields.role.as_deref(), Some("AI is the product"));
        assert_eq!(record.fields.score("specialization"), Some(3.0));
        assert_eq!(record.fields.risk_level(), Some(3.5));
        assert_eq!(record.fields.risk_description(), Some("prompt injection"));
        assert_eq!(record.fields.feedback_level(), Some(2.0));
        assert_eq!(record.fields.feedback_aspects(), Some("thumbs up/down"));
        assert_eq!(record.fields.feedback_explanation(), Some("descriptive"));
    }

    #[test]
    fn test_parse_minimal_record() {
        let (record, diagnostics) = parse(r#"{"product_name": "DeepL"}"#);
        assert!(diagnostics.is_empty());
        assert_eq!(record.product_name.as_deref(), Some("DeepL"));
        assert_eq!(record.fields, ScoredFields::default());
    }

    #[test]
    fn test_empty_product_name_is_absent() {
        let (record, _) = parse(r#"{"product_name": ""}"#);
        assert_eq!(record.product_name, None);
    }

    #[test]
    fn test_legacy_alias_translated() {
        let (record, _) = parse(r#"{"product_name": "X", "scores": {"personalization": 2.0}}"#);
        assert_eq!(record.fields.score("specialization"), Some(2.0));
        assert!(!record.fields.scores.contains_key("personalization"));
    }

    #[test]
    fn test_canonical_beats_alias() {
        let (record, _) = parse(
            r#"{"product_name": "X", "scores": {"personalization": 2.0, "specialization": 4.0}}"#,
        );
        assert_eq!(record.fields.score("specialization"), Some(4.0));
    }

    #[test]
    fn test_unknown_dimension_dropped_silently() {
        let (record, diagnostics) =
            parse(r#"{"product_name": "X", "scores": {"vibes": 5, "autonomy": 1}}"#);
        assert!(diagnostics.is_empty());
        assert_eq!(record.fields.scores.len(), 1);
    }

    #[test]
    fn test_non_numeric_score_is_diagnosed() {
        let (record, diagnostics) =
            parse(r#"{"product_name": "X", "scores": {"autonomy": "high", "conversational": 3}}"#);
        assert_eq!(diagnostics.count(DiagnosticKind::InvalidField), 1);
        assert_eq!(record.fields.score("autonomy"), None);
        assert_eq!(record.fields.score("conversational"), Some(3.0));
    }

    #[test]
    fn test_risk_without_level() {
        let (record, _) = parse(
            r#"{"product_name": "X", "risk_of_adversarial_attacks": {"description": "none"}}"#,
        );
        assert!(record.fields.risk.is_some());
        assert_eq!(record.fields.risk_level(), None);
    }

    #[test]
    fn test_not_an_object_is_error() {
        let mut diagnostics = Diagnostics::new();
        let result = parse_record(
            "[1, 2, 3]",
            Path::new("x.json"),
            &DimensionSet::standard(),
            &mut diagnostics,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_truncated_json_is_error() {
        let mut diagnostics = Diagnostics::new();
        let result = parse_record(
            r#"{"product_name": "Gem"#,
            Path::new("x.json"),
            &DimensionSet::standard(),
            &mut diagnostics,
        );
        assert!(result.is_err());
    }
}
