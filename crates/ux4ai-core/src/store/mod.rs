//! Record storage
//!
//! Submissions and reference records live in a plain directory tree. The
//! tree is reached only through the [`Repository`] capability (enumerate and
//! read by key), so aggregation does not care where records come from.
//!
//! Layout:
//! - `<data_root>/<submitter_id>/<safe_entity_name>.json`
//! - `<reference_root>/<safe_entity_name>.json`

pub mod fs;
pub mod memory;
pub mod paths;
pub mod reference;
pub mod scan;
pub mod writer;

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::diagnostics::Diagnostics;

pub use fs::FsRepository;
pub use memory::MemoryRepository;
pub use paths::safe_entity_name;
pub use reference::ReferenceLoader;
pub use scan::{Scan, Scanner};
pub use writer::SubmissionWriter;

/// Address of one record inside a repository
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    /// Full path, used for reading and in diagnostics
    path: PathBuf,
    /// Path relative to the repository root
    relative: PathBuf,
}

impl RecordKey {
    pub fn new(root: &Path, relative: impl Into<PathBuf>) -> Self {
        let relative = relative.into();
        Self {
            path: root.join(&relative),
            relative,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Name of the top-level directory holding the record, if it is nested
    ///
    /// For submissions this is the submitter directory.
    pub fn directory_hint(&self) -> Option<&str> {
        let mut components = self.relative.components();
        let first = components.next()?;
        components.next()?;
        match first {
            Component::Normal(name) => name.to_str(),
            _ => None,
        }
    }
}

/// Read-only access to a set of records
pub trait Repository {
    /// Root the repository was opened on
    fn root(&self) -> &Path;

    /// Extension (without dot) that marks a candidate record
    fn extension(&self) -> &str;

    /// Whether the root exists at all
    fn exists(&self) -> bool;

    /// All candidate record keys in a deterministic order
    ///
    /// Problems reaching individual entries are recorded in `diagnostics`
    /// and the entries are skipped.
    fn enumerate(&self, diagnostics: &mut Diagnostics) -> Vec<RecordKey>;

    /// Whether a record exists under `key`
    fn contains(&self, key: &RecordKey) -> bool;

    /// Read a record's raw contents
    fn read(&self, key: &RecordKey) -> io::Result<String>;

    /// Key of the record named after an entity
    fn key_for_entity(&self, entity_name: &str) -> RecordKey {
        RecordKey::new(
            self.root(),
            format!("{}.{}", safe_entity_name(entity_name), self.extension()),
        )
    }
}
