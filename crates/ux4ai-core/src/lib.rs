//! ux4ai core library
//!
//! Aggregation engine for the AI UX workshop: scans student submissions,
//! merges them per product and projects the results onto chart axes next to
//! the instructor's reference answers.

pub mod aggregate;
pub mod capture;
pub mod config;
pub mod diagnostics;
pub mod dimension;
pub mod error;
pub mod format;
pub mod logging;
pub mod projection;
pub mod record;
pub mod report;
pub mod store;
pub mod workshop;
