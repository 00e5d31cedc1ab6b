//! In-memory repository, for embedding and tests

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::paths::DEFAULT_EXTENSION;
use super::{RecordKey, Repository};
use crate::diagnostics::Diagnostics;

/// Records held in a map from relative path to contents
///
/// A `None` entry stands for a record that exists but cannot be read.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    root: PathBuf,
    records: BTreeMap<PathBuf, Option<String>>,
}

impl MemoryRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            records: BTreeMap::new(),
        }
    }

    /// Add or replace a record
    pub fn insert(&mut self, relative: impl Into<PathBuf>, contents: impl Into<String>) {
        self.records.insert(relative.into(), Some(contents.into()));
    }

    /// Add a record whose reads fail
    pub fn insert_unreadable(&mut self, relative: impl Into<PathBuf>) {
        self.records.insert(relative.into(), None);
    }

    pub fn with(mut self, relative: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(relative, contents);
        self
    }
}

impl Repository for MemoryRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn extension(&self) -> &str {
        DEFAULT_EXTENSION
    }

    fn exists(&self) -> bool {
        true
    }

    fn enumerate(&self, _diagnostics: &mut Diagnostics) -> Vec<RecordKey> {
        self.records
            .keys()
            .filter(|p| p.extension().is_some_and(|e| e == DEFAULT_EXTENSION))
            .map(|p| RecordKey::new(&self.root, p.clone()))
            .collect()
    }

    fn contains(&self, key: &RecordKey) -> bool {
        self.records.contains_key(key.relative())
    }

    fn read(&self, key: &RecordKey) -> io::Result<String> {
        match self.records.get(key.relative()) {
            Some(Some(contents)) => Ok(contents.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "record is unreadable",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such record")),
        }
    }
}
