//! Vsgen: platform-aware generator for VS Code configuration files.
//!
//! This is the main entry point for the `vsgen` CLI. It parses arguments,
//! resolves the workspace context, runs the one-pass generation pipeline,
//! and handles errors with proper exit codes.

mod cli;
pub mod context;
pub mod detect;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generate;
pub mod host;
pub mod output;
pub mod profile;
pub mod render;
pub mod resolve;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::GeneratorContext;
use generate::GenerateOptions;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let mut ctx = match cli.root {
        Some(root) => GeneratorContext::resolve_from(root),
        None => GeneratorContext::resolve()?,
    };
    if let Some(profile) = cli.profile {
        ctx = ctx.with_profile_path(profile);
    }

    generate::run(&ctx, GenerateOptions { strict: cli.strict })
}
