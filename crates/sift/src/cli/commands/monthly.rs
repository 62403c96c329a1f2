//! Implementation of `sift monthly`.

use std::process::ExitCode;

use sift_frame::monthly_keyword_counts;

use super::shared::{fail, finish, keyword_expr, load_frame};
use crate::cli::{args::MonthlyCommand, context::CommandContext, output::emit_counts};

/// Counts keyword-matching records per month.
pub fn run(ctx: &CommandContext, cmd: &MonthlyCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &MonthlyCommand) -> Result<(), ExitCode> {
    let config = &ctx.config;
    let text_column = cmd.column.as_deref().unwrap_or(&config.text.column);
    let time_column = cmd.time.time_column.as_deref().unwrap_or(&config.time.column);
    let format = cmd.time.format.as_deref().unwrap_or(&config.time.format);
    let expr = keyword_expr(
        &cmd.keywords,
        &config.keywords.include,
        config.keywords.logic.as_deref(),
    )?;

    let frame = load_frame(&cmd.input)?;
    let counts =
        monthly_keyword_counts(&frame, text_column, time_column, format, &expr).map_err(fail)?;
    emit_counts(&counts, &cmd.output)
}
