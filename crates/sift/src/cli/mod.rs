//! CLI support for the `sift` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;
pub mod telemetry;

pub use context::CommandContext;
