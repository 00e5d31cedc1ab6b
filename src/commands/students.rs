//! `ux4ai students` - each student's answers next to the reference answers

use crate::cli::{Cli, OutputFormat};
use ux4ai_core::error::Result;
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::report::{FieldValue, StudentReport};
use ux4ai_core::workshop::Workshop;

use super::render::{note_diagnostics, print_json};

/// Execute the students command
pub fn execute(cli: &Cli, workshop: &mut Workshop, student: Option<&str>) -> Result<()> {
    let reports = match student {
        Some(id) => vec![workshop.student_report(id)?],
        None => workshop.student_reports(),
    };

    match cli.format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Human => {
            output_human(cli, &reports);
            note_diagnostics(cli, workshop.diagnostics());
        }
        OutputFormat::Records => output_records(&reports),
    }

    Ok(())
}

fn output_human(cli: &Cli, reports: &[StudentReport]) {
    if reports.is_empty() {
        if !cli.quiet {
            println!("No submissions found");
        }
        return;
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {} ==", report.submitter_id);

        for entry in &report.entries {
            println!();
            println!("{}", entry.entity_name);
            if !entry.has_reference {
                println!("  (no reference answer)");
            }
            println!("  {:<32} {:<24} {}", "field", "answer", "reference");
            for row in &entry.rows {
                println!(
                    "  {:<32} {:<24} {}",
                    row.field.to_string(),
                    row.submitted.to_string(),
                    row.reference
                );
            }
        }
    }
}

fn quoted(value: &FieldValue) -> String {
    match value {
        FieldValue::Missing => "-".to_string(),
        other => format!("\"{}\"", escape_value(&other.to_string())),
    }
}

fn output_records(reports: &[StudentReport]) {
    println!(
        "{}",
        records_header("students", &[("students", reports.len().to_string())])
    );

    for report in reports {
        println!(
            "S {} products={}",
            report.submitter_id,
            report.entries.len()
        );
        for entry in &report.entries {
            let product = escape_value(&entry.entity_name);
            for row in &entry.rows {
                println!(
                    "F {} \"{}\" {} answer={} reference={}",
                    report.submitter_id,
                    product,
                    row.field.id(),
                    quoted(&row.submitted),
                    quoted(&row.reference)
                );
            }
        }
    }
}
