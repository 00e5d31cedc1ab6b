//! Recoverable data-quality problems found while reading the submission tree
//!
//! A diagnostic never aborts a scan. Each one is logged at `warn` level as it
//! is recorded and kept so that callers can report them afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What went wrong with a single unit of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The configured root directory does not exist
    MissingRoot,
    /// The file could not be read (permissions, vanished mid-scan, ...)
    Unreadable,
    /// The file is not valid JSON or not a JSON object
    Malformed,
    /// A field was present but had an unusable value; the field is ignored
    InvalidField,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::MissingRoot => "missing_root",
            DiagnosticKind::Unreadable => "unreadable",
            DiagnosticKind::Malformed => "malformed",
            DiagnosticKind::InvalidField => "invalid_field",
        };
        f.write_str(s)
    }
}

/// A single recoverable problem tied to a path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: PathBuf,
    pub message: String,
}

/// Collected diagnostics for one scan or lookup
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a warning
    pub fn push(&mut self, kind: DiagnosticKind, path: &Path, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(kind = %kind, path = %path.display(), error = %message, "diagnostic");
        self.entries.push(Diagnostic {
            kind,
            path: path.to_path_buf(),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Number of diagnostics of the given kind
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
