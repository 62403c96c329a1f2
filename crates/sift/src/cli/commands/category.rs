//! Implementation of `sift category`.

use std::process::ExitCode;

use sift_frame::{SortOrder, count_by_category};

use super::shared::{fail, finish, load_frame};
use crate::cli::{args::CategoryCommand, context::CommandContext, output::emit_counts};

/// Counts records per distinct value of a column.
pub fn run(ctx: &CommandContext, cmd: &CategoryCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &CategoryCommand) -> Result<(), ExitCode> {
    let report = &ctx.config.report;
    let sort: SortOrder = cmd
        .sort
        .as_deref()
        .unwrap_or(&report.sort)
        .parse()
        .map_err(fail)?;
    let percentage = cmd.percentage || report.percentage;

    let frame = load_frame(&cmd.input)?;
    let counts = count_by_category(&frame, &cmd.column, sort, percentage).map_err(fail)?;
    emit_counts(&counts, &cmd.output)
}
