//! `ux4ai submit` - record a new rating in the submission tree

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, SubmitArgs};
use ux4ai_core::capture::{build_submission, CaptureInput};
use ux4ai_core::config::WorkshopConfig;
use ux4ai_core::error::Result;
use ux4ai_core::format::{escape_value, records_header};
use ux4ai_core::store::SubmissionWriter;

use super::render::print_json;

#[derive(Serialize)]
struct SubmitOutput<'a> {
    submitter_id: &'a str,
    product_name: &'a str,
    path: String,
}

/// Execute the submit command
pub fn execute(cli: &Cli, config: &WorkshopConfig, args: &SubmitArgs) -> Result<()> {
    let dimensions = config.validate()?;

    let input = CaptureInput {
        full_name: args.name.clone(),
        product_name: args.product.clone(),
        ai_role: args.role.clone(),
        scores: args.scores.clone(),
        risk_level: args.risk_level,
        risk_description: args.risk_description.clone(),
        feedback_aspects: args.feedback_aspects.clone(),
        feedback_level: args.feedback_level,
        feedback_explanation: args.feedback_explanation.clone(),
    };
    let file = build_submission(&input, &dimensions)?;

    let writer = SubmissionWriter::new(&config.data_dir, config.extension());
    let path = writer.write(&file)?;
    tracing::info!(
        submitter = %file.username,
        product = %file.product_name,
        path = %path.display(),
        "saved submission"
    );

    match cli.format {
        OutputFormat::Json => print_json(&SubmitOutput {
            submitter_id: &file.username,
            product_name: &file.product_name,
            path: path.display().to_string(),
        })?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Saved rating of {} for {}", file.product_name, file.username);
            }
            println!("{}", path.display());
        }
        OutputFormat::Records => {
            println!("{}", records_header("submit", &[]));
            println!(
                "W {} \"{}\" path=\"{}\"",
                file.username,
                escape_value(&file.product_name),
                escape_value(&path.display().to_string())
            );
        }
    }

    Ok(())
}
