//! The fixed set of rating dimensions
//!
//! Dimensions are identified by canonical string ids in a fixed order. That
//! order is the axis order of every projection. Older data used different
//! keys for some dimensions (`personalization` for `specialization`); those
//! are mapped to the canonical id on ingestion via an alias table and never
//! appear in aggregates.

use std::collections::BTreeMap;

use crate::bail_config;
use crate::error::Result;

pub const CONVERSATIONAL: &str = "conversational";
pub const SPECIALIZATION: &str = "specialization";
pub const AUTONOMY: &str = "autonomy";
pub const ACCESSIBILITY: &str = "accessibility";
pub const EXPLAINABILITY: &str = "explainability";

/// Canonical dimension order
pub const STANDARD_DIMENSIONS: [&str; 5] = [
    CONVERSATIONAL,
    SPECIALIZATION,
    AUTONOMY,
    ACCESSIBILITY,
    EXPLAINABILITY,
];

/// Legacy keys accepted on ingestion: (alias, canonical)
pub const STANDARD_ALIASES: [(&str, &str); 1] = [("personalization", SPECIALIZATION)];

/// Validated, ordered dimension ids plus legacy aliases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSet {
    ids: Vec<String>,
    aliases: BTreeMap<String, String>,
}

impl DimensionSet {
    /// Build a dimension set, rejecting lists that cannot be projected
    ///
    /// Fails on an empty list, blank or duplicate ids, aliases that shadow a
    /// canonical id, and aliases that point at an unknown id.
    pub fn new<I, S>(ids: I, aliases: BTreeMap<String, String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();

        if ids.is_empty() {
            bail_config!("dimension list is empty");
        }

        for (i, id) in ids.iter().enumerate() {
            if id.trim().is_empty() {
                bail_config!("dimension #{} is blank", i + 1);
            }
            if ids[..i].contains(id) {
                bail_config!("dimension '{}' is listed twice", id);
            }
        }

        for (alias, target) in &aliases {
            if ids.contains(alias) {
                bail_config!("alias '{}' shadows a canonical dimension", alias);
            }
            if !ids.contains(target) {
                bail_config!("alias '{}' points at unknown dimension '{}'", alias, target);
            }
        }

        Ok(Self { ids, aliases })
    }

    /// The five workshop dimensions with the `personalization` alias
    pub fn standard() -> Self {
        Self {
            ids: STANDARD_DIMENSIONS.iter().map(|s| s.to_string()).collect(),
            aliases: standard_aliases(),
        }
    }

    /// Canonical ids in projection order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|d| d == id)
    }

    /// Resolve a raw key to its canonical id
    pub fn canonicalize<'a>(&'a self, key: &str) -> Option<&'a str> {
        if let Some(id) = self.ids.iter().find(|d| *d == key) {
            return Some(id.as_str());
        }
        self.aliases.get(key).map(String::as_str)
    }

    /// Whether `key` is a legacy alias rather than a canonical id
    pub fn is_alias(&self, key: &str) -> bool {
        self.aliases.contains_key(key)
    }
}

impl Default for DimensionSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Default alias table as an owned map
pub fn standard_aliases() -> BTreeMap<String, String> {
    STANDARD_ALIASES
        .iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect()
}
