//! Command implementations and dispatch.

pub mod category;
pub mod config;
pub mod entities;
pub mod filter;
pub mod init;
pub mod monthly;
pub mod normalize;
pub mod period;
mod shared;
pub mod top;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Filter(cmd) => filter::run(ctx, &cmd),
        Commands::Period(cmd) => period::run(ctx, &cmd),
        Commands::Category(cmd) => category::run(ctx, &cmd),
        Commands::Monthly(cmd) => monthly::run(ctx, &cmd),
        Commands::Top(cmd) => top::run(ctx, &cmd),
        Commands::Entities(cmd) => entities::run(ctx, &cmd),
        Commands::Normalize(cmd) => normalize::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
