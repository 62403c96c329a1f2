//! Command-line interface for the `sift` table preprocessor.

use std::process::ExitCode;

use clap::Parser;
use sift::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, telemetry,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load()
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
