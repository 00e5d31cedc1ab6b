//! Command implementations for ux4ai

pub mod compare;
pub mod dispatch;
pub mod products;
pub mod render;
pub mod scan;
pub mod show;
pub mod students;
pub mod submit;
pub mod summary;
