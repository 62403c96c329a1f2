//! Implementation of `sift entities`.

use std::process::ExitCode;

use sift_frame::{EntityRule, count_per_entity_from_url_with};

use super::shared::{fail, finish, load_frame};
use crate::cli::{args::EntitiesCommand, context::CommandContext, output::emit_counts};

/// Counts records per URL-derived entity.
pub fn run(ctx: &CommandContext, cmd: &EntitiesCommand) -> ExitCode {
    finish(execute(ctx, cmd))
}

/// Command body.
fn execute(ctx: &CommandContext, cmd: &EntitiesCommand) -> Result<(), ExitCode> {
    let entity = &ctx.config.entity;
    let filter_column = cmd.filter_column.as_deref().unwrap_or(&entity.filter_column);
    let filter_value = cmd.filter_value.as_deref().unwrap_or(&entity.filter_value);
    let url_column = cmd.url_column.as_deref().unwrap_or(&entity.url_column);
    let rule = EntityRule {
        marker: cmd.marker.clone().unwrap_or_else(|| entity.marker.clone()),
        output_column: entity.column.clone(),
    };

    let frame = load_frame(&cmd.input)?;
    let counts =
        count_per_entity_from_url_with(&frame, filter_column, filter_value, url_column, &rule)
            .map_err(fail)?;
    emit_counts(&counts, &cmd.output)
}
