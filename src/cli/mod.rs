//! CLI argument parsing for vsgen.
//!
//! Uses clap derive macros. There are no subcommands: the bare invocation
//! regenerates the workspace's `.vscode` files, and the flags only adjust
//! where the inputs come from and how strict the run is.

use clap::Parser;
use std::path::PathBuf;

/// Vsgen: platform-aware generator for VS Code configuration files.
///
/// Reads the workspace's platform profile document, selects the host
/// operating system's sub-profile, and regenerates the `.vscode` files
/// (c_cpp_properties.json, launch.json, tasks.json, extensions.json) by
/// substituting the resolved values into embedded templates. Regeneration
/// is destructive: previously generated files are removed first.
#[derive(Parser, Debug)]
#[command(name = "vsgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root to generate for (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Platform profile document (default: <root>/platform.json).
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Fail when a template references a placeholder with no resolved
    /// value, instead of writing the placeholder text verbatim.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
