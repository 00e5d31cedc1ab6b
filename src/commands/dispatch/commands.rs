//! Command implementations for all ux4ai commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use ux4ai_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{CompareArgs, ShowArgs, StudentsArgs, SubmitArgs};
    use crate::commands;
    use crate::commands::dispatch::trace_command;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Products => execute_products(ctx),
            Commands::Show(args) => execute_show(ctx, args),
            Commands::Compare(args) => execute_compare(ctx, args),
            Commands::Students(args) => execute_students(ctx, args),
            Commands::Summary => execute_summary(ctx),
            Commands::Submit(args) => execute_submit(ctx, args),
            Commands::Scan => execute_scan(ctx),
        }
    }

    fn execute_products(ctx: &CommandContext) -> Result<()> {
        let mut workshop = ctx.open_workshop()?;
        trace_command!(ctx.cli, ctx.start, "open_workshop");
        commands::products::execute(ctx.cli, &mut workshop)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_show(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
        let mut workshop = ctx.open_workshop()?;
        trace_command!(ctx.cli, ctx.start, "open_workshop");
        commands::show::execute(ctx.cli, &mut workshop, &args.product, args.reference)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_compare(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
        let mut workshop = ctx.open_workshop()?;
        trace_command!(ctx.cli, ctx.start, "open_workshop");
        commands::compare::execute(
            ctx.cli,
            &mut workshop,
            commands::compare::CompareOptions {
                first: &args.first,
                second: &args.second,
                reference: args.reference,
                average: !args.no_average,
            },
        )?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_students(ctx: &CommandContext, args: &StudentsArgs) -> Result<()> {
        let mut workshop = ctx.open_workshop()?;
        trace_command!(ctx.cli, ctx.start, "open_workshop");
        commands::students::execute(ctx.cli, &mut workshop, args.student.as_deref())?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_summary(ctx: &CommandContext) -> Result<()> {
        let mut workshop = ctx.open_workshop()?;
        trace_command!(ctx.cli, ctx.start, "open_workshop");
        commands::summary::execute(ctx.cli, &mut workshop)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_submit(ctx: &CommandContext, args: &SubmitArgs) -> Result<()> {
        let config = ctx.load_config()?;
        trace_command!(ctx.cli, ctx.start, "load_config");
        commands::submit::execute(ctx.cli, &config, args)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_scan(ctx: &CommandContext) -> Result<()> {
        let workshop = ctx.open_workshop()?;
        trace_command!(ctx.cli, ctx.start, "open_workshop");
        commands::scan::execute(ctx.cli, &workshop)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}
