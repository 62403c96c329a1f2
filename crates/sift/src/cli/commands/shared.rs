//! Shared helpers for command implementations.

use std::{fmt::Display, path::Path, process::ExitCode};

use sift_frame::{Frame, KeywordExpr, read_csv};
use sift_query::parse;
use tracing::info;

use crate::cli::args::KeywordArgs;

/// Prints `error: {err}` and yields the failure exit code.
pub fn fail(err: impl Display) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}

/// Collapses a command body's result into an exit code.
pub fn finish(result: Result<(), ExitCode>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

/// Reads the input CSV or exits with an error.
pub fn load_frame(path: &Path) -> Result<Frame, ExitCode> {
    let frame = read_csv(path).map_err(fail)?;
    info!(
        path = %path.display(),
        rows = frame.num_rows(),
        columns = frame.num_columns(),
        "loaded table"
    );
    Ok(frame)
}

/// Builds the keyword expression selected on the command line.
///
/// A `--query` expression wins; then `-k` keywords; with neither, `fallback` (the
/// configured keyword list) applies. `--logic` overrides the configured combinator. An
/// empty selection places no constraint on rows.
pub fn keyword_expr(
    args: &KeywordArgs,
    fallback: &[String],
    fallback_logic: Option<&str>,
) -> Result<KeywordExpr, ExitCode> {
    if let Some(query) = &args.query {
        return match parse(query) {
            Ok(Some(expr)) => Ok(expr),
            Ok(None) => Ok(KeywordExpr::and(Vec::new())),
            Err(e) => Err(fail(e)),
        };
    }

    let keywords = if args.keywords.is_empty() {
        fallback
    } else {
        args.keywords.as_slice()
    };
    let logic = args.logic.as_deref().or(fallback_logic);
    KeywordExpr::from_list(keywords, logic).map_err(fail)
}
