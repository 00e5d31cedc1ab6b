//! Path conventions for the record tree

/// Default submission root, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default reference root, relative to the working directory
pub const DEFAULT_REFERENCE_DIR: &str = "solutions";

/// Default record file extension
pub const DEFAULT_EXTENSION: &str = "json";

/// Submitter id used when neither the record nor its location names one
pub const UNKNOWN_SUBMITTER: &str = "unknown";

/// File stem for an entity: lowercased, spaces and `/` replaced by `_`
pub fn safe_entity_name(entity_name: &str) -> String {
    entity_name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .collect()
}
