//! Directory-tree repository

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{RecordKey, Repository};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Records stored as files under a root directory
#[derive(Debug, Clone)]
pub struct FsRepository {
    root: PathBuf,
    extension: String,
}

impl FsRepository {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    fn is_candidate(&self, path: &Path) -> bool {
        path.extension().is_some_and(|e| e == self.extension.as_str())
    }
}

impl Repository for FsRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn exists(&self) -> bool {
        self.root.is_dir()
    }

    #[tracing::instrument(skip(self, diagnostics), fields(root = %self.root.display()))]
    fn enumerate(&self, diagnostics: &mut Diagnostics) -> Vec<RecordKey> {
        let mut keys = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                    diagnostics.push(DiagnosticKind::Unreadable, &path, e.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.is_candidate(entry.path()) {
                continue;
            }

            // WalkDir yields paths under the root it was given
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();
            keys.push(RecordKey::new(&self.root, relative));
        }

        tracing::debug!(candidates = keys.len(), "enumerate");
        keys
    }

    fn contains(&self, key: &RecordKey) -> bool {
        key.path().is_file()
    }

    fn read(&self, key: &RecordKey) -> io::Result<String> {
        std::fs::read_to_string(key.path())
    }
}
