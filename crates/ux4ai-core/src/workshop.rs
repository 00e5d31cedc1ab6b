//! The aggregation engine as seen by presentation layers
//!
//! A [`Workshop`] owns the current set of aggregates. `refresh` rebuilds
//! them from a fresh scan; nothing is updated incrementally. Reference
//! records are read on demand and cached until the next refresh, and any
//! problem reading one lands in the same diagnostics as the scan. The engine
//! is single-threaded; callers that refresh from several places should
//! serialize those calls.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use crate::aggregate::{group_by_submitter, Aggregate, Aggregator};
use crate::config::WorkshopConfig;
use crate::diagnostics::Diagnostics;
use crate::dimension::DimensionSet;
use crate::error::{Result, Ux4aiError};
use crate::projection::{project, project_scores, Projection};
use crate::record::{ReferenceRecord, Submission};
use crate::report::{compare_fields, StudentEntry, StudentReport, SummaryEntry, SummaryReport};
use crate::store::{FsRepository, ReferenceLoader, Repository, Scanner};

/// Two products side by side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: Projection,
    pub second: Projection,
}

pub struct Workshop {
    dimensions: DimensionSet,
    submission_repo: Box<dyn Repository>,
    reference_repo: Box<dyn Repository>,
    aggregates: BTreeMap<String, Aggregate>,
    /// Reference lookups since the last refresh; `None` marks a miss
    references: BTreeMap<String, Option<ReferenceRecord>>,
    diagnostics: Diagnostics,
}

impl Workshop {
    /// Open the file-tree repositories named by `config`
    ///
    /// Fails only on configuration faults. Missing directories are not an
    /// error here; they surface as diagnostics on the first refresh.
    pub fn open(config: &WorkshopConfig) -> Result<Self> {
        let dimensions = config.validate()?;
        let extension = config.extension();
        Ok(Self::with_repositories(
            dimensions,
            Box::new(FsRepository::new(&config.data_dir, extension)),
            Box::new(FsRepository::new(&config.reference_dir, extension)),
        ))
    }

    /// Build an engine over arbitrary repositories
    pub fn with_repositories(
        dimensions: DimensionSet,
        submission_repo: Box<dyn Repository>,
        reference_repo: Box<dyn Repository>,
    ) -> Self {
        Self {
            dimensions,
            submission_repo,
            reference_repo,
            aggregates: BTreeMap::new(),
            references: BTreeMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    /// Scan the submission tree once and collect every accepted record
    pub fn scan(&self, diagnostics: &mut Diagnostics) -> Vec<Submission> {
        let scanner = Scanner::new(self.submission_repo.as_ref(), &self.dimensions);
        let records: Vec<_> = scanner.scan(diagnostics).collect();
        records
    }

    /// Rebuild all aggregates from a fresh scan
    #[tracing::instrument(skip(self))]
    pub fn refresh(&mut self) -> &BTreeMap<String, Aggregate> {
        self.rescan();
        &self.aggregates
    }

    /// Start a new refresh cycle and hand back the scanned records
    ///
    /// Aggregates, diagnostics and the reference cache are all replaced.
    fn rescan(&mut self) -> Vec<Submission> {
        let start = Instant::now();
        let mut diagnostics = Diagnostics::new();
        let records = self.scan(&mut diagnostics);

        let mut aggregator = Aggregator::new(&self.dimensions);
        for submission in &records {
            aggregator.add(submission);
        }

        self.aggregates = aggregator.finish();
        self.references.clear();
        self.diagnostics = diagnostics;

        tracing::debug!(
            elapsed = ?start.elapsed(),
            records = records.len(),
            products = self.aggregates.len(),
            diagnostics = self.diagnostics.len(),
            "refresh"
        );
        records
    }

    /// Rebuild and return every product's aggregate, keyed by product name
    pub fn aggregate_all(&mut self) -> &BTreeMap<String, Aggregate> {
        self.refresh()
    }

    /// Aggregates from the last refresh
    pub fn aggregates(&self) -> &BTreeMap<String, Aggregate> {
        &self.aggregates
    }

    pub fn aggregate(&self, entity_name: &str) -> Option<&Aggregate> {
        self.aggregates.get(entity_name)
    }

    /// Diagnostics from the last refresh, plus any reference lookups since
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Product names from the last refresh, sorted
    pub fn product_names(&self) -> Vec<&str> {
        self.aggregates.keys().map(String::as_str).collect()
    }

    /// Load a reference into the cache unless this cycle already tried
    fn ensure_reference(&mut self, entity_name: &str) {
        if self.references.contains_key(entity_name) {
            return;
        }
        let reference = ReferenceLoader::new(self.reference_repo.as_ref(), &self.dimensions)
            .load(entity_name, &mut self.diagnostics);
        self.references.insert(entity_name.to_string(), reference);
    }

    fn cached_reference(&self, entity_name: &str) -> Option<&ReferenceRecord> {
        self.references.get(entity_name).and_then(Option::as_ref)
    }

    /// Look up a product's reference record
    pub fn reference(&mut self, entity_name: &str) -> Option<&ReferenceRecord> {
        self.ensure_reference(entity_name);
        self.cached_reference(entity_name)
    }

    /// Project a product's aggregate and, optionally, its reference
    ///
    /// Products without submissions project to all zeros; this never fails.
    pub fn project(&mut self, entity_name: &str, include_reference: bool) -> Projection {
        if include_reference {
            self.ensure_reference(entity_name);
        }
        let reference = include_reference
            .then(|| self.cached_reference(entity_name))
            .flatten();
        project(
            entity_name,
            self.aggregate(entity_name),
            reference,
            &self.dimensions,
        )
    }

    /// Project two products for a side-by-side chart
    pub fn compare(&mut self, first: &str, second: &str, include_reference: bool) -> Comparison {
        Comparison {
            first: self.project(first, include_reference),
            second: self.project(second, include_reference),
        }
    }

    /// Per-student reports from a fresh scan, sorted by submitter id
    pub fn student_reports(&mut self) -> Vec<StudentReport> {
        let groups = group_by_submitter(self.rescan());
        for submission in groups.values().flatten() {
            self.ensure_reference(&submission.entity_name);
        }

        groups
            .into_iter()
            .map(|(submitter_id, submissions)| self.student_report_from(submitter_id, submissions))
            .collect()
    }

    /// Report for one submitter, from a fresh scan
    pub fn student_report(&mut self, submitter_id: &str) -> Result<StudentReport> {
        let mut groups = group_by_submitter(self.rescan());
        let submissions = groups
            .remove(submitter_id)
            .ok_or_else(|| Ux4aiError::not_found("student", submitter_id))?;

        for submission in &submissions {
            self.ensure_reference(&submission.entity_name);
        }
        Ok(self.student_report_from(submitter_id.to_string(), submissions))
    }

    fn student_report_from(&self, submitter_id: String, submissions: Vec<Submission>) -> StudentReport {
        let entries = submissions
            .into_iter()
            .map(|submission| {
                let reference = self.cached_reference(&submission.entity_name);
                StudentEntry {
                    has_reference: reference.is_some(),
                    rows: compare_fields(
                        &submission.fields,
                        reference.map(|r| &r.fields),
                        &self.dimensions,
                    ),
                    projection: project_scores(
                        &submission.entity_name,
                        &submission.fields,
                        reference,
                        &self.dimensions,
                    ),
                    entity_name: submission.entity_name,
                }
            })
            .collect();

        StudentReport {
            submitter_id,
            entries,
        }
    }

    /// Summary of the current aggregates against their references
    pub fn summary(&mut self) -> SummaryReport {
        let names: Vec<String> = self.aggregates.keys().cloned().collect();
        for name in &names {
            self.ensure_reference(name);
        }

        let entries = self
            .aggregates
            .values()
            .map(|aggregate| {
                let reference = self.cached_reference(&aggregate.entity_name);
                SummaryEntry::build(aggregate, reference, &self.dimensions)
            })
            .collect();
        SummaryReport { entries }
    }
}
