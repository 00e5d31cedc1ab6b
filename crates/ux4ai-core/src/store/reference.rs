//! Reference (instructor) record lookup
//!
//! References are looked up by entity name on demand. A missing file is the
//! normal "no reference" case; only unreadable or malformed files produce a
//! diagnostic. Lookups never fail and never mutate anything.

use super::Repository;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::dimension::DimensionSet;
use crate::record::{parse_record, ReferenceRecord};

pub struct ReferenceLoader<'a, R: Repository + ?Sized> {
    repository: &'a R,
    dimensions: &'a DimensionSet,
}

impl<'a, R: Repository + ?Sized> ReferenceLoader<'a, R> {
    pub fn new(repository: &'a R, dimensions: &'a DimensionSet) -> Self {
        Self {
            repository,
            dimensions,
        }
    }

    /// Load the reference record for `entity_name`, if there is a usable one
    #[tracing::instrument(skip(self, diagnostics))]
    pub fn load(&self, entity_name: &str, diagnostics: &mut Diagnostics) -> Option<ReferenceRecord> {
        let key = self.repository.key_for_entity(entity_name);
        if !self.repository.exists() || !self.repository.contains(&key) {
            tracing::debug!(path = %key.path().display(), "no reference record");
            return None;
        }

        let text = match self.repository.read(&key) {
            Ok(text) => text,
            Err(e) => {
                diagnostics.push(DiagnosticKind::Unreadable, key.path(), e.to_string());
                return None;
            }
        };

        match parse_record(&text, key.path(), self.dimensions, diagnostics) {
            Ok(parsed) => Some(ReferenceRecord {
                entity_name: parsed.product_name,
                fields: parsed.fields,
            }),
            Err(e) => {
                diagnostics.push(DiagnosticKind::Malformed, key.path(), e.to_string());
                None
            }
        }
    }
}
