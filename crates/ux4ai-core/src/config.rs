//! Workshop configuration
//!
//! Configuration lives in an optional `ux4ai.toml`. Every key has a default,
//! so a missing file is the same as an empty one. Dimension settings are
//! validated up front; a bad dimension list is a hard error raised before any
//! scan starts.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_config;
use crate::dimension::DimensionSet;
use crate::error::{Result, Ux4aiError};

pub use types::{WorkshopConfig, CONFIG_FILE};

impl WorkshopConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Ux4aiError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: WorkshopConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load an explicit config file, or `ux4ai.toml` under `root` if present
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let path = resolve_against(root, path);
            return Self::load(&path);
        }

        let default_path = root.join(CONFIG_FILE);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Make relative directories relative to `root`
    pub fn resolve_paths(&mut self, root: &Path) {
        self.data_dir = resolve_against(root, &self.data_dir);
        self.reference_dir = resolve_against(root, &self.reference_dir);
    }

    /// Validate the configuration and build its dimension set
    pub fn validate(&self) -> Result<DimensionSet> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            bail_config!("record extension is empty");
        }
        if extension.contains(['/', '\\']) {
            bail_config!("record extension '{}' contains a path separator", self.extension);
        }
        DimensionSet::new(self.dimensions.clone(), self.dimension_aliases.clone())
    }

    /// Extension without a leading dot
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Join a relative path onto `root`; absolute paths pass through
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
