//! Per-product aggregation of submissions
//!
//! Aggregates are always rebuilt from scratch. Every numeric average divides
//! the sum of supplied values by the group's `sample_count`; a record that
//! omits a field contributes zero to the sum but still counts toward the
//! divisor. How many records actually supplied each dimension is tracked
//! separately in `dimension_supplied`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dimension::DimensionSet;
use crate::record::Submission;

/// Merged statistics for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub entity_name: String,
    /// Number of records in the group, always >= 1
    pub sample_count: usize,
    /// Average per canonical dimension; every dimension is present
    pub dimension_averages: BTreeMap<String, f64>,
    /// Records that supplied each dimension
    pub dimension_supplied: BTreeMap<String, usize>,
    /// Verbatim role values and how often they were chosen
    pub role_frequency: BTreeMap<String, usize>,
    pub risk_level_average: f64,
    pub feedback_level_average: f64,
}

impl Aggregate {
    pub fn average(&self, dimension: &str) -> f64 {
        self.dimension_averages
            .get(dimension)
            .copied()
            .unwrap_or_default()
    }

    /// Number of records that chose `role`
    pub fn role_count(&self, role: &str) -> usize {
        self.role_frequency.get(role).copied().unwrap_or_default()
    }

    /// Most frequently chosen role; ties go to the smallest value
    pub fn dominant_role(&self) -> Option<&str> {
        // BTreeMap iterates in ascending key order, so keeping the first
        // maximum resolves ties toward the smallest key.
        let mut best: Option<(&str, usize)> = None;
        for (role, &count) in &self.role_frequency {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((role.as_str(), count));
            }
        }
        best.map(|(role, _)| role)
    }

    /// Whether some dimension was supplied by fewer records than were counted
    pub fn is_sparse(&self) -> bool {
        self.dimension_supplied
            .values()
            .any(|&supplied| supplied < self.sample_count)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    dimension_sums: BTreeMap<String, f64>,
    dimension_supplied: BTreeMap<String, usize>,
    roles: BTreeMap<String, usize>,
    risk_sum: f64,
    feedback_sum: f64,
}

impl Accumulator {
    fn add(&mut self, submission: &Submission, dimensions: &DimensionSet) {
        self.count += 1;

        let fields = &submission.fields;
        for dimension in dimensions.ids() {
            if let Some(score) = fields.score(dimension) {
                *self.dimension_sums.entry(dimension.clone()).or_default() += score;
                *self.dimension_supplied.entry(dimension.clone()).or_default() += 1;
            }
        }

        if let Some(role) = &fields.role {
            *self.roles.entry(role.clone()).or_default() += 1;
        }

        self.risk_sum += fields.risk_level().unwrap_or(0.0);
        self.feedback_sum += fields.feedback_level().unwrap_or(0.0);
    }

    fn finish(self, entity_name: String, dimensions: &DimensionSet) -> Aggregate {
        let count = self.count as f64;

        let dimension_averages = dimensions
            .ids()
            .iter()
            .map(|d| {
                let sum = self.dimension_sums.get(d).copied().unwrap_or(0.0);
                (d.clone(), sum / count)
            })
            .collect();

        let dimension_supplied = dimensions
            .ids()
            .iter()
            .map(|d| (d.clone(), self.dimension_supplied.get(d).copied().unwrap_or(0)))
            .collect();

        Aggregate {
            entity_name,
            sample_count: self.count,
            dimension_averages,
            dimension_supplied,
            role_frequency: self.roles,
            risk_level_average: self.risk_sum / count,
            feedback_level_average: self.feedback_sum / count,
        }
    }
}

/// Incremental builder for one aggregation pass
#[derive(Debug)]
pub struct Aggregator<'a> {
    dimensions: &'a DimensionSet,
    groups: BTreeMap<String, Accumulator>,
}

impl<'a> Aggregator<'a> {
    pub fn new(dimensions: &'a DimensionSet) -> Self {
        Self {
            dimensions,
            groups: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, submission: &Submission) {
        self.groups
            .entry(submission.entity_name.clone())
            .or_default()
            .add(submission, self.dimensions);
    }

    /// Aggregates keyed (and ordered) by product name
    pub fn finish(self) -> BTreeMap<String, Aggregate> {
        let dimensions = self.dimensions;
        self.groups
            .into_iter()
            .map(|(name, acc)| {
                let aggregate = acc.finish(name.clone(), dimensions);
                (name, aggregate)
            })
            .collect()
    }
}

/// Aggregate a sequence of submissions by product name
pub fn aggregate<I>(records: I, dimensions: &DimensionSet) -> BTreeMap<String, Aggregate>
where
    I: IntoIterator<Item = Submission>,
{
    let mut aggregator = Aggregator::new(dimensions);
    for record in records {
        aggregator.add(&record);
    }
    aggregator.finish()
}

/// Group submissions by submitter; each group is sorted by product name
pub fn group_by_submitter<I>(records: I) -> BTreeMap<String, Vec<Submission>>
where
    I: IntoIterator<Item = Submission>,
{
    let mut groups: BTreeMap<String, Vec<Submission>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.submitter_id.clone())
            .or_default()
            .push(record);
    }
    for submissions in groups.values_mut() {
        submissions.sort_by(|a, b| a.entity_name.cmp(&b.entity_name));
    }
    groups
}
