//! `ux4ai compare` - two products side by side
//!
//! Either product may be missing from the data; its averages are then zero.

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use ux4ai_core::error::Result;
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::projection::Projection;
use ux4ai_core::report::format_level;
use ux4ai_core::workshop::Workshop;

use super::render::{note_diagnostics, print_json, projection_records};

pub struct CompareOptions<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub reference: bool,
    pub average: bool,
}

#[derive(Serialize)]
struct ProductSeries<'a> {
    entity_name: &'a str,
    sample_count: usize,
    dimensions: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregate: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<&'a [f64]>,
}

fn series<'a>(workshop: &Workshop, projection: &'a Projection, average: bool) -> ProductSeries<'a> {
    ProductSeries {
        entity_name: &projection.entity_name,
        sample_count: workshop
            .aggregate(&projection.entity_name)
            .map_or(0, |a| a.sample_count),
        dimensions: &projection.dimensions,
        aggregate: average.then_some(projection.aggregate.as_slice()),
        reference: projection.reference.as_deref(),
    }
}

/// Execute the compare command
pub fn execute(cli: &Cli, workshop: &mut Workshop, opts: CompareOptions<'_>) -> Result<()> {
    workshop.refresh();
    let comparison = workshop.compare(opts.first, opts.second, opts.reference);
    let workshop = &*workshop;
    let pair = [&comparison.first, &comparison.second];

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = pair
                .iter()
                .map(|p| series(workshop, p, opts.average))
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Human => {
            output_human(workshop, &pair, &opts);
            note_diagnostics(cli, workshop.diagnostics());
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "compare",
                    &[
                        ("first", format!("\"{}\"", escape_value(opts.first))),
                        ("second", format!("\"{}\"", escape_value(opts.second))),
                    ]
                )
            );
            for projection in pair {
                for line in projection_records(projection, opts.average) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

fn output_human(workshop: &Workshop, pair: &[&Projection; 2], opts: &CompareOptions<'_>) {
    let mut columns: Vec<String> = Vec::new();
    for projection in pair {
        if opts.average {
            let samples = workshop
                .aggregate(&projection.entity_name)
                .map_or(0, |a| a.sample_count);
            columns.push(format!("{} (n={})", projection.entity_name, samples));
        }
        if projection.reference.is_some() {
            columns.push(format!("{} (ref)", projection.entity_name));
        }
    }

    let width = columns.iter().map(String::len).max().unwrap_or(0).max(9);
    let mut header = format!("{:<16}", "dimension");
    for column in &columns {
        header.push_str(&format!(" {:>width$}", column, width = width));
    }
    println!("{}", header);

    for (first, second) in pair[0].rows().zip(pair[1].rows()) {
        let mut line = format!("{:<16}", first.0);
        for (_, aggregate, reference) in [first, second] {
            if opts.average {
                line.push_str(&format!(" {:>width$}", format_level(aggregate), width = width));
            }
            if let Some(reference) = reference {
                line.push_str(&format!(" {:>width$}", format_level(reference), width = width));
            }
        }
        println!("{}", line);
    }

    if opts.reference {
        for projection in pair {
            if projection.reference.is_none() {
                println!("(no reference answer for {})", projection.entity_name);
            }
        }
    }
}
