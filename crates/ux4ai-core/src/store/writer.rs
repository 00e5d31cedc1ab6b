//! Writing submissions into the record tree

use std::fs;
use std::path::PathBuf;

use super::paths::safe_entity_name;
use crate::error::{Result, Ux4aiError};
use crate::record::SubmissionFile;

/// Writes one file per (submitter, entity) pair under a data root
#[derive(Debug, Clone)]
pub struct SubmissionWriter {
    root: PathBuf,
    extension: String,
}

impl SubmissionWriter {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Path a submission will be written to
    pub fn path_for(&self, submitter_id: &str, entity_name: &str) -> PathBuf {
        self.root.join(submitter_id).join(format!(
            "{}.{}",
            safe_entity_name(entity_name),
            self.extension
        ))
    }

    /// Write (or overwrite) a submission, creating directories as needed
    #[tracing::instrument(skip(self, file), fields(submitter = %file.username, product = %file.product_name))]
    pub fn write(&self, file: &SubmissionFile) -> Result<PathBuf> {
        let path = self.path_for(&file.username, &file.product_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Ux4aiError::io_operation("create directory", parent.display(), e))?;
        }

        let contents = file.to_json_pretty()?;
        fs::write(&path, contents)
            .map_err(|e| Ux4aiError::io_operation("write submission", path.display(), e))?;

        tracing::debug!(path = %path.display(), "submission written");
        Ok(path)
    }
}
