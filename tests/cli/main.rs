//! Integration tests for the ux4ai CLI

mod compare;
mod config;
mod logging;
mod misc;
mod products;
mod scan;
mod show;
mod students;
mod submit;
mod summary;
mod support;
