//! Output helpers shared by the report commands

use serde::Serialize;

use crate::cli::Cli;
use ux4ai_core::aggregate::Aggregate;
use ux4ai_core::diagnostics::Diagnostics;
use ux4ai_core::error::Result;
use ux4ai_core::format::escape_value;
use ux4ai_core::projection::Projection;
use ux4ai_core::report::format_level;

/// Pretty-print any report model as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Tell the user that some files were skipped, without repeating each one
pub fn note_diagnostics(cli: &Cli, diagnostics: &Diagnostics) {
    if cli.quiet || diagnostics.is_empty() {
        return;
    }
    eprintln!(
        "note: {} problem(s) found while reading records; run `ux4ai scan` for details",
        diagnostics.len()
    );
}

/// `4.5 / 5`
pub fn out_of_five(value: f64) -> String {
    format!("{} / 5", format_level(value))
}

/// Role tallies, most frequent first
pub fn role_tallies(aggregate: &Aggregate) -> Vec<(&str, usize)> {
    let mut roles: Vec<_> = aggregate
        .role_frequency
        .iter()
        .map(|(role, &count)| (role.as_str(), count))
        .collect();
    roles.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    roles
}

/// Dashboard block for one aggregate: counts, roles and levels
pub fn print_aggregate_header(aggregate: &Aggregate) {
    println!(
        "{} ({} submission{})",
        aggregate.entity_name,
        aggregate.sample_count,
        if aggregate.sample_count == 1 { "" } else { "s" }
    );
    for (role, count) in role_tallies(aggregate) {
        println!("  role: {} ({})", role, count);
    }
    println!(
        "  risk of adversarial attacks: {}",
        out_of_five(aggregate.risk_level_average)
    );
    println!(
        "  analytics type level: {}",
        out_of_five(aggregate.feedback_level_average)
    );
}

/// Per-dimension table of a projection
pub fn print_projection(projection: &Projection, show_aggregate: bool, show_reference: bool) {
    let mut header = format!("  {:<16}", "dimension");
    if show_aggregate {
        header.push_str(&format!(" {:>9}", "average"));
    }
    if show_reference && projection.reference.is_some() {
        header.push_str(&format!(" {:>9}", "reference"));
    }
    println!("{}", header);

    for (dimension, aggregate, reference) in projection.rows() {
        let mut line = format!("  {:<16}", dimension);
        if show_aggregate {
            line.push_str(&format!(" {:>9}", format_level(aggregate)));
        }
        if show_reference {
            if let Some(reference) = reference {
                line.push_str(&format!(" {:>9}", format_level(reference)));
            }
        }
        println!("{}", line);
    }

    if show_reference && projection.reference.is_none() {
        println!("  (no reference answer for {})", projection.entity_name);
    }
}

/// `D` lines of a projection in records format
pub fn projection_records(projection: &Projection, show_aggregate: bool) -> Vec<String> {
    let product = escape_value(&projection.entity_name);
    projection
        .rows()
        .map(|(dimension, aggregate, reference)| {
            let mut line = format!("D \"{}\" {}", product, dimension);
            if show_aggregate {
                line.push_str(&format!(" avg={}", format_level(aggregate)));
            }
            if let Some(reference) = reference {
                line.push_str(&format!(" ref={}", format_level(reference)));
            }
            line
        })
        .collect()
}
