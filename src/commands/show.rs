//! `ux4ai show` - one product's aggregate, optionally against its reference

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use ux4ai_core::aggregate::Aggregate;
use ux4ai_core::error::{Result, Ux4aiError};
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::projection::Projection;
use ux4ai_core::report::format_level;
use ux4ai_core::workshop::Workshop;

use super::render::{
    note_diagnostics, print_aggregate_header, print_json, print_projection, projection_records,
};

#[derive(Serialize)]
struct ShowOutput<'a> {
    aggregate: &'a Aggregate,
    dominant_role: Option<&'a str>,
    projection: &'a Projection,
}

/// Execute the show command
pub fn execute(cli: &Cli, workshop: &mut Workshop, product: &str, reference: bool) -> Result<()> {
    workshop.refresh();
    let projection = workshop.project(product, reference);
    let aggregate = workshop
        .aggregate(product)
        .ok_or_else(|| Ux4aiError::not_found("product", product))?;

    match cli.format {
        OutputFormat::Json => print_json(&ShowOutput {
            aggregate,
            dominant_role: aggregate.dominant_role(),
            projection: &projection,
        })?,
        OutputFormat::Human => {
            print_aggregate_header(aggregate);
            println!();
            print_projection(&projection, true, reference);
            note_diagnostics(cli, workshop.diagnostics());
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "show",
                    &[
                        ("product", format!("\"{}\"", escape_value(product))),
                        ("samples", aggregate.sample_count.to_string()),
                        ("reference", projection.reference.is_some().to_string()),
                    ]
                )
            );
            println!(
                "L risk={} feedback={}",
                format_level(aggregate.risk_level_average),
                format_level(aggregate.feedback_level_average)
            );
            for (role, count) in &aggregate.role_frequency {
                println!("R \"{}\" count={}", escape_value(role), count);
            }
            for line in projection_records(&projection, true) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
