//! `ux4ai summary` - class averages against the reference answers

use crate::cli::{Cli, OutputFormat};
use ux4ai_core::error::Result;
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::report::{format_level, SummaryEntry, SummaryReport};
use ux4ai_core::workshop::Workshop;

use super::render::{note_diagnostics, out_of_five, print_json, print_projection, projection_records};

/// Execute the summary command
pub fn execute(cli: &Cli, workshop: &mut Workshop) -> Result<()> {
    workshop.refresh();
    let summary = workshop.summary();

    match cli.format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            output_human(cli, &summary);
            note_diagnostics(cli, workshop.diagnostics());
        }
        OutputFormat::Records => output_records(&summary),
    }

    Ok(())
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

fn output_human(cli: &Cli, summary: &SummaryReport) {
    if summary.entries.is_empty() {
        if !cli.quiet {
            println!("No submissions found");
        }
        return;
    }

    for (i, entry) in summary.entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_entry(entry);
    }
}

fn print_entry(entry: &SummaryEntry) {
    println!("{} ({} submissions)", entry.entity_name, entry.sample_count);
    println!(
        "  role: {} (reference: {})",
        entry.dominant_role.as_deref().unwrap_or("N/A"),
        entry.reference_role.as_deref().unwrap_or("N/A")
    );
    println!(
        "  risk of adversarial attacks: {} (reference: {})",
        out_of_five(entry.risk_level_average),
        or_na(entry.reference_risk_level.map(out_of_five))
    );
    println!(
        "  analytics type level: {} (reference: {})",
        out_of_five(entry.feedback_level_average),
        or_na(entry.reference_feedback_level.map(out_of_five))
    );
    print_projection(&entry.projection, true, true);
}

fn output_records(summary: &SummaryReport) {
    println!(
        "{}",
        records_header("summary", &[("products", summary.entries.len().to_string())])
    );

    for entry in &summary.entries {
        let product = escape_value(&entry.entity_name);
        println!(
            "P \"{}\" samples={} reference={} risk={} ref_risk={} feedback={} ref_feedback={}",
            product,
            entry.sample_count,
            entry.has_reference,
            format_level(entry.risk_level_average),
            or_na(entry.reference_risk_level.map(format_level)),
            format_level(entry.feedback_level_average),
            or_na(entry.reference_feedback_level.map(format_level)),
        );
        if let Some(role) = &entry.dominant_role {
            println!("R \"{}\" \"{}\" dominant", product, escape_value(role));
        }
        if let Some(role) = &entry.reference_role {
            println!("R \"{}\" \"{}\" reference", product, escape_value(role));
        }
        for line in projection_records(&entry.projection, true) {
            println!("{}", line);
        }
    }
}
