//! `ux4ai scan` - what the scanner accepted, and what it skipped

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use ux4ai_core::diagnostics::Diagnostics;
use ux4ai_core::error::Result;
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::record::Submission;
use ux4ai_core::workshop::Workshop;

use super::render::print_json;

#[derive(Serialize)]
struct ScanOutput<'a> {
    records: &'a [Submission],
    diagnostics: &'a Diagnostics,
}

fn display_path(submission: &Submission) -> String {
    submission
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Execute the scan command
pub fn execute(cli: &Cli, workshop: &Workshop) -> Result<()> {
    let mut diagnostics = Diagnostics::new();
    let records = workshop.scan(&mut diagnostics);

    match cli.format {
        OutputFormat::Json => print_json(&ScanOutput {
            records: &records,
            diagnostics: &diagnostics,
        })?,
        OutputFormat::Human => {
            if records.is_empty() && !cli.quiet {
                println!("No submissions found");
            }
            for record in &records {
                println!(
                    "{:<12} {:<24} {}",
                    record.submitter_id,
                    record.entity_name,
                    display_path(record)
                );
            }
            if !diagnostics.is_empty() {
                println!();
                for diagnostic in &diagnostics {
                    println!(
                        "{}: {}: {}",
                        diagnostic.kind,
                        diagnostic.path.display(),
                        diagnostic.message
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "scan",
                    &[
                        ("accepted", records.len().to_string()),
                        ("diagnostics", diagnostics.len().to_string()),
                    ]
                )
            );
            for record in &records {
                println!(
                    "N {} \"{}\" path=\"{}\"",
                    record.submitter_id,
                    escape_value(&record.entity_name),
                    escape_value(&display_path(record))
                );
            }
            for diagnostic in &diagnostics {
                println!(
                    "E {} path=\"{}\" \"{}\"",
                    diagnostic.kind,
                    escape_value(&diagnostic.path.display().to_string()),
                    escape_value(&diagnostic.message)
                );
            }
        }
    }

    Ok(())
}
