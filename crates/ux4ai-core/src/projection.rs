//! Projection of aggregates and references onto the canonical axis order
//!
//! A projection is what a polar chart or comparison table consumes: parallel
//! numeric series aligned to the dimension order, with absent values
//! defaulted to zero. There is no failure case: a missing aggregate gives an
//! all-zero series, a missing reference gives `reference: None`.

use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::dimension::DimensionSet;
use crate::record::{ReferenceRecord, ScoredFields};

/// Aligned series for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub entity_name: String,
    /// Axis labels (canonical dimension ids) in order
    pub dimensions: Vec<String>,
    /// Aggregate averages, or a single submission's scores
    pub aggregate: Vec<f64>,
    /// Reference scores, when a reference was requested and found
    pub reference: Option<Vec<f64>>,
}

impl Projection {
    /// The aggregate series with its first value repeated at the end
    pub fn closed_aggregate(&self) -> Vec<f64> {
        close_loop(&self.aggregate)
    }

    /// The reference series closed the same way
    pub fn closed_reference(&self) -> Option<Vec<f64>> {
        self.reference.as_deref().map(close_loop)
    }

    /// Axis labels closed the same way
    pub fn closed_dimensions(&self) -> Vec<String> {
        close_loop(&self.dimensions)
    }

    /// `(dimension, aggregate value, reference value)` per axis
    ///
    /// Stops at the shorter of the axis labels and the aggregate series; a
    /// short reference series reads as missing past its end.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64, Option<f64>)> + '_ {
        let mut reference = self.reference.as_deref().map(|r| r.iter().copied());
        self.dimensions
            .iter()
            .zip(&self.aggregate)
            .map(move |(d, &a)| (d.as_str(), a, reference.as_mut().and_then(Iterator::next)))
    }
}

/// Repeat the first element at the end, for closed polar shapes
pub fn close_loop<T: Clone>(series: &[T]) -> Vec<T> {
    let mut closed = series.to_vec();
    if let Some(first) = series.first() {
        closed.push(first.clone());
    }
    closed
}

fn scores_series(fields: &ScoredFields, dimensions: &DimensionSet) -> Vec<f64> {
    dimensions
        .ids()
        .iter()
        .map(|d| fields.score(d).unwrap_or(0.0))
        .collect()
}

/// Project an aggregate (possibly absent) and a reference (possibly absent)
pub fn project(
    entity_name: &str,
    aggregate: Option<&Aggregate>,
    reference: Option<&ReferenceRecord>,
    dimensions: &DimensionSet,
) -> Projection {
    let aggregate = dimensions
        .ids()
        .iter()
        .map(|d| aggregate.map_or(0.0, |a| a.average(d)))
        .collect();

    Projection {
        entity_name: entity_name.to_string(),
        dimensions: dimensions.ids().to_vec(),
        aggregate,
        reference: reference.map(|r| scores_series(&r.fields, dimensions)),
    }
}

/// Project a single submission's own scores against a reference
pub fn project_scores(
    entity_name: &str,
    fields: &ScoredFields,
    reference: Option<&ReferenceRecord>,
    dimensions: &DimensionSet,
) -> Projection {
    Projection {
        entity_name: entity_name.to_string(),
        dimensions: dimensions.ids().to_vec(),
        aggregate: scores_series(fields, dimensions),
        reference: reference.map(|r| scores_series(&r.fields, dimensions)),
    }
}
