//! Implementation of `sift filter`.

use std::process::ExitCode;

use sift_frame::{Polarity, filter};

use super::shared::{fail, finish, keyword_expr, load_frame};
use crate::cli::{args::FilterCommand, context::CommandContext, output::emit_frame};

/// Keeps (or with `--exclude`, drops) the rows matching a keyword filter.
pub fn run(ctx: &CommandContext, cmd: &FilterCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &FilterCommand) -> Result<(), ExitCode> {
    let config = &ctx.config;
    let column = cmd.column.as_deref().unwrap_or(&config.text.column);
    let (polarity, fallback) = if cmd.exclude {
        (Polarity::Exclude, &config.keywords.exclude)
    } else {
        (Polarity::Include, &config.keywords.include)
    };
    let expr = keyword_expr(&cmd.keywords, fallback, config.keywords.logic.as_deref())?;

    let frame = load_frame(&cmd.input)?;
    let kept = filter(&frame, column, &expr, polarity).map_err(fail)?;
    emit_frame(&kept, &cmd.output)
}
