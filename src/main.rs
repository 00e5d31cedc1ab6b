//! ux4ai - workshop rating aggregation CLI
//!
//! Scans the participants' rating records, merges them per product and
//! compares the results against the instructor's reference answers.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use ux4ai_core::error::{ExitCode as Ux4aiExitCode, Ux4aiError};
use ux4ai_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = env::args().collect();

    // `--format` is global, so a parse failure happens before `Cli.format`
    // exists. Read it from argv to decide whether the failure gets an envelope.
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() && wants_json(&args) => {
            let error = parse_failure(&err);
            eprintln!("{}", error.to_json());
            return exit_code(&error);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(Ux4aiExitCode::Success as u8),
        Err(e) => {
            report(&cli, &e);
            exit_code(&e)
        }
    }
}

fn exit_code(error: &Ux4aiError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

/// Print a command failure in the requested output format
fn report(cli: &Cli, error: &Ux4aiError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
}

/// Classify a clap failure: bad invocations are usage errors
fn parse_failure(err: &clap::Error) -> Ux4aiError {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => Ux4aiError::UsageError(err.to_string()),
        _ => Ux4aiError::Other(err.to_string()),
    }
}

/// Whether the raw arguments select JSON output, in either `--format` spelling
fn wants_json(args: &[String]) -> bool {
    let is_json = |value: &str| value.eq_ignore_ascii_case("json");
    args.iter()
        .any(|arg| arg.strip_prefix("--format=").is_some_and(is_json))
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && is_json(pair[1].as_str()))
}
