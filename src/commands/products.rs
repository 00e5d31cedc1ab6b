//! `ux4ai products` - aggregate every product in the submission tree

use crate::cli::{Cli, OutputFormat};
use ux4ai_core::aggregate::Aggregate;
use ux4ai_core::error::Result;
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::report::format_level;
use ux4ai_core::workshop::Workshop;

use super::render::{note_diagnostics, print_aggregate_header, print_json};

/// Execute the products command
pub fn execute(cli: &Cli, workshop: &mut Workshop) -> Result<()> {
    workshop.refresh();
    let aggregates: Vec<&Aggregate> = workshop.aggregates().values().collect();

    match cli.format {
        OutputFormat::Json => print_json(&aggregates)?,
        OutputFormat::Human => {
            output_human(cli, workshop, &aggregates);
            note_diagnostics(cli, workshop.diagnostics());
        }
        OutputFormat::Records => output_records(workshop, &aggregates),
    }

    Ok(())
}

fn output_human(cli: &Cli, workshop: &Workshop, aggregates: &[&Aggregate]) {
    if aggregates.is_empty() {
        if !cli.quiet {
            println!("No submissions found");
        }
        return;
    }

    for (i, aggregate) in aggregates.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_aggregate_header(aggregate);
        for dimension in workshop.dimensions().ids() {
            println!(
                "  {:<16} {:>9}",
                dimension,
                format_level(aggregate.average(dimension))
            );
        }
    }
}

fn output_records(workshop: &Workshop, aggregates: &[&Aggregate]) {
    println!(
        "{}",
        records_header(
            "products",
            &[
                ("products", aggregates.len().to_string()),
                ("diagnostics", workshop.diagnostics().len().to_string()),
            ]
        )
    );

    for aggregate in aggregates {
        let product = escape_value(&aggregate.entity_name);
        println!(
            "P \"{}\" samples={} risk={} feedback={}",
            product,
            aggregate.sample_count,
            format_level(aggregate.risk_level_average),
            format_level(aggregate.feedback_level_average)
        );
        for (role, count) in &aggregate.role_frequency {
            println!("R \"{}\" \"{}\" count={}", product, escape_value(role), count);
        }
        for dimension in workshop.dimensions().ids() {
            println!(
                "D \"{}\" {} avg={} supplied={}",
                product,
                dimension,
                format_level(aggregate.average(dimension)),
                aggregate
                    .dimension_supplied
                    .get(dimension)
                    .copied()
                    .unwrap_or_default()
            );
        }
    }
}
