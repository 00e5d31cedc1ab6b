//! Submission store scanner
//!
//! A scan walks the whole repository each time it is started and yields
//! typed [`Submission`]s lazily. Unreadable and malformed files are recorded
//! as diagnostics and skipped; records without a product name are dropped
//! without one. Nothing a scan meets in the data can abort it.

use std::time::Instant;

use super::paths::UNKNOWN_SUBMITTER;
use super::{RecordKey, Repository};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::dimension::DimensionSet;
use crate::record::{parse_record, Submission};
use crate::trace_time;

/// Produces restartable scans over a submission repository
pub struct Scanner<'a, R: Repository + ?Sized> {
    repository: &'a R,
    dimensions: &'a DimensionSet,
}

impl<'a, R: Repository + ?Sized> Scanner<'a, R> {
    pub fn new(repository: &'a R, dimensions: &'a DimensionSet) -> Self {
        Self {
            repository,
            dimensions,
        }
    }

    /// Start a new scan
    ///
    /// A missing root yields an empty scan and one `MissingRoot` diagnostic.
    pub fn scan<'s>(&'s self, diagnostics: &'s mut Diagnostics) -> Scan<'s, R> {
        let start = Instant::now();
        let keys = if self.repository.exists() {
            self.repository.enumerate(diagnostics)
        } else {
            diagnostics.push(
                DiagnosticKind::MissingRoot,
                self.repository.root(),
                "data directory not found",
            );
            Vec::new()
        };
        trace_time!(start, "scan_enumerate", candidates = keys.len());

        Scan {
            repository: self.repository,
            dimensions: self.dimensions,
            keys: keys.into_iter(),
            diagnostics,
        }
    }
}

/// One pass over a repository
pub struct Scan<'s, R: Repository + ?Sized> {
    repository: &'s R,
    dimensions: &'s DimensionSet,
    keys: std::vec::IntoIter<RecordKey>,
    diagnostics: &'s mut Diagnostics,
}

impl<R: Repository + ?Sized> Scan<'_, R> {
    fn load(&mut self, key: RecordKey) -> Option<Submission> {
        let text = match self.repository.read(&key) {
            Ok(text) => text,
            Err(e) => {
                self.diagnostics
                    .push(DiagnosticKind::Unreadable, key.path(), e.to_string());
                return None;
            }
        };

        let parsed = match parse_record(&text, key.path(), self.dimensions, self.diagnostics) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.diagnostics
                    .push(DiagnosticKind::Malformed, key.path(), e.to_string());
                return None;
            }
        };

        let Some(entity_name) = parsed.product_name else {
            tracing::debug!(path = %key.path().display(), "discarding record without product_name");
            return None;
        };

        let submitter_id = parsed
            .username
            .or_else(|| key.directory_hint().map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_SUBMITTER.to_string());

        Some(Submission {
            submitter_id,
            entity_name,
            fields: parsed.fields,
            path: Some(key.path().to_path_buf()),
        })
    }
}

impl<R: Repository + ?Sized> Iterator for Scan<'_, R> {
    type Item = Submission;

    fn next(&mut self) -> Option<Submission> {
        loop {
            let key = self.keys.next()?;
            if let Some(submission) = self.load(key) {
                return Some(submission);
            }
        }
    }
}
