//! Implementation of `sift config`.

use std::process::ExitCode;

use sift_config::discover_config_files;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows the config files in effect, the merged settings and any warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("{}", dim("# No configuration files found; showing defaults."));
    } else {
        for path in &files {
            println!("{}", dim(&format!("# {}", path.display())));
        }
    }
    println!();
    print!("{}", ctx.config.settings_to_toml());

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        return ExitCode::SUCCESS;
    }
    eprintln!();
    eprintln!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        eprintln!("   {}", warning(&w.to_string()));
    }
    ExitCode::FAILURE
}
