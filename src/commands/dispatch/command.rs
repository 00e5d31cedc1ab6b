//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use ux4ai_core::config::{resolve_against, WorkshopConfig};
use ux4ai_core::error::Result;
use ux4ai_core::workshop::Workshop;

/// Load the config file and apply command-line overrides
pub fn load_config(cli: &Cli, root: &PathBuf) -> Result<WorkshopConfig> {
    let mut config = WorkshopConfig::discover(cli.config.as_deref(), root)?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = resolve_against(root, dir);
    }
    if let Some(dir) = &cli.reference_dir {
        config.reference_dir = resolve_against(root, dir);
    }
    config.resolve_paths(root);

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        reference_dir = %config.reference_dir.display(),
        "resolved config"
    );
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn load_config(&self) -> Result<WorkshopConfig> {
        load_config(self.cli, self.root)
    }

    /// Open the engine over the configured trees
    pub fn open_workshop(&self) -> Result<Workshop> {
        let config = self.load_config()?;
        Workshop::open(&config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("ux4ai {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Aggregate and compare workshop ratings of AI products.");
        println!();
        println!("Run `ux4ai --help` for usage information.");
        Ok(())
    }
}
