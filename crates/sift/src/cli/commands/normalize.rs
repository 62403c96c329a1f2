//! Implementation of `sift normalize`.

use std::{path::PathBuf, process::ExitCode};

use sift_frame::Column;
use sift_text::{
    DEFAULT_LOANWORD_FILE, LoanwordTable, PunctuationNormalizer, PunctuationStripper,
    RepeatCollapser, TextPipeline,
};
use tracing::info;

use super::shared::{fail, finish, load_frame};
use crate::cli::{args::NormalizeCommand, context::CommandContext, output::emit_frame};

/// Cleans a text column: loanword fixes, punctuation, repeated characters.
pub fn run(ctx: &CommandContext, cmd: &NormalizeCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &NormalizeCommand) -> Result<(), ExitCode> {
    let settings = &ctx.config.normalize;
    let column = cmd.column.as_deref().unwrap_or(&ctx.config.text.column);
    let repeats = cmd.repeats.unwrap_or(settings.repeats);

    let mut pipeline = TextPipeline::new();
    if let Some(path) = loanword_path(ctx, cmd) {
        pipeline = pipeline.stage(LoanwordTable::load(&path).map_err(fail)?);
    }
    pipeline = if cmd.keep_punctuation {
        pipeline.stage(PunctuationNormalizer)
    } else {
        pipeline.stage(PunctuationStripper)
    };
    pipeline = pipeline.stage(RepeatCollapser::new(repeats));
    info!(stages = ?pipeline.names(), "text pipeline ready");

    let frame = load_frame(&cmd.input)?;
    let texts: Vec<String> = frame
        .column(column)
        .map_err(fail)?
        .values()
        .iter()
        .map(|v| v.render().into_owned())
        .collect();
    let cleaned = pipeline.run(texts).map_err(fail)?;
    let out = frame
        .with_column(Column::text(column, cleaned))
        .map_err(fail)?;
    emit_frame(&out, &cmd.output)
}

/// Picks the loanword table: the flag, then config, then `confused_loanwords.txt` in the
/// working directory when present.
fn loanword_path(ctx: &CommandContext, cmd: &NormalizeCommand) -> Option<PathBuf> {
    if let Some(path) = cmd
        .loanwords
        .clone()
        .or_else(|| ctx.config.normalize.loanwords.clone())
    {
        return Some(path);
    }
    let local = ctx.cwd.join(DEFAULT_LOANWORD_FILE);
    local.is_file().then_some(local)
}
