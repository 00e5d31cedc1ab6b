//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dimension::{standard_aliases, STANDARD_DIMENSIONS};
use crate::store::paths::{DEFAULT_DATA_DIR, DEFAULT_EXTENSION, DEFAULT_REFERENCE_DIR};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "ux4ai.toml";

/// Workshop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkshopConfig {
    /// Root of the submission tree
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding reference records
    #[serde(default = "default_reference_dir")]
    pub reference_dir: PathBuf,

    /// Record file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Canonical dimension ids, in chart axis order
    #[serde(default = "default_dimensions")]
    pub dimensions: Vec<String>,

    /// Legacy dimension keys mapped to canonical ids
    #[serde(default = "standard_aliases")]
    pub dimension_aliases: BTreeMap<String, String>,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            reference_dir: default_reference_dir(),
            extension: default_extension(),
            dimensions: default_dimensions(),
            dimension_aliases: standard_aliases(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_reference_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REFERENCE_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_dimensions() -> Vec<String> {
    STANDARD_DIMENSIONS.iter().map(|d| d.to_string()).collect()
}
