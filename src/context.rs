//! Workspace path resolution for vsgen.
//!
//! All paths the generator touches are resolved here once and passed
//! explicitly into the other modules, never read from ambient global state.
//! This keeps the engine testable against arbitrary injected workspaces.

use crate::error::{Result, VsgenError};
use std::env;
use std::path::{Path, PathBuf};

/// Default platform profile document name, relative to the workspace root.
pub const DEFAULT_PROFILE_FILE: &str = "platform.json";

/// Output directory name for the generated editor-integration files.
pub const OUTPUT_DIR_NAME: &str = ".vscode";

/// Build description file scanned for project-name auto-detection.
pub const BUILD_DESCRIPTION_FILE: &str = "CMakeLists.txt";

/// Resolved paths for one generator run.
///
/// All paths are absolute or rooted at the workspace root supplied by the
/// caller.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    /// Workspace root directory.
    pub root: PathBuf,

    /// Platform profile document (default: `{root}/platform.json`).
    pub profile_path: PathBuf,

    /// Output directory for generated files (`{root}/.vscode`).
    pub output_dir: PathBuf,

    /// Build description file scanned for the project name
    /// (`{root}/CMakeLists.txt`).
    pub build_description: PathBuf,
}

impl GeneratorContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            VsgenError::IoError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context from a specific workspace root.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let profile_path = root.join(DEFAULT_PROFILE_FILE);
        let output_dir = root.join(OUTPUT_DIR_NAME);
        let build_description = root.join(BUILD_DESCRIPTION_FILE);

        Self {
            root,
            profile_path,
            output_dir,
            build_description,
        }
    }

    /// Override the profile document path.
    pub fn with_profile_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.profile_path = path.as_ref().to_path_buf();
        self
    }

    /// Path of a generated output file under the output directory.
    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// Path of the stale debug build directory for a resolved build-dir base.
    pub fn debug_build_dir(&self, build_dir_base: &str) -> PathBuf {
        self.root.join(build_dir_base).join("Debug")
    }
}
