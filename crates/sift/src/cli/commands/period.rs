//! Implementation of `sift period`.

use std::process::ExitCode;

use sift_frame::{Period, count_by_period, normalize_time};

use super::shared::{fail, finish, load_frame};
use crate::cli::{args::PeriodCommand, context::CommandContext, output::emit_counts};

/// Counts records per time bucket.
pub fn run(ctx: &CommandContext, cmd: &PeriodCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &PeriodCommand) -> Result<(), ExitCode> {
    let config = &ctx.config;
    let column = cmd.time.time_column.as_deref().unwrap_or(&config.time.column);
    let format = cmd.time.format.as_deref().unwrap_or(&config.time.format);
    let period: Period = cmd
        .period
        .as_deref()
        .unwrap_or(&config.time.period)
        .parse()
        .map_err(fail)?;

    let frame = load_frame(&cmd.input)?;
    let normalized = normalize_time(&frame, column, format).map_err(fail)?;
    let counts = count_by_period(&normalized, column, period, cmd.drop_zero, !cmd.descending)
        .map_err(fail)?;
    emit_counts(&counts, &cmd.output)
}
