//! Implementation of `sift top`.

use std::process::ExitCode;

use sift_frame::top_n_across_columns;

use super::shared::{fail, finish, load_frame};
use crate::cli::{args::TopCommand, context::CommandContext, output::emit_frame};

/// Prints the most frequent values of several columns side by side.
pub fn run(ctx: &CommandContext, cmd: &TopCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &TopCommand) -> Result<(), ExitCode> {
    let report = &ctx.config.report;
    let n = cmd.limit.unwrap_or(report.top_n);
    let percentage = cmd.percentage || report.percentage;

    let frame = load_frame(&cmd.input)?;
    let table = top_n_across_columns(&frame, &cmd.columns, n, percentage).map_err(fail)?;
    emit_frame(&table, &cmd.output)
}
