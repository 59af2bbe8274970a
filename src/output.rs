//! Output directory management for vsgen.
//!
//! Performs the destructive reset that precedes rendering: stale compiled
//! artifacts and previously generated configuration files must not survive a
//! profile change. Post-condition: the output directory exists and contains
//! no plain files from a prior run. Subdirectories inside the output
//! directory are left untouched.

use crate::context::GeneratorContext;
use crate::error::{Result, VsgenError};
use std::fs;
use std::path::Path;

/// Reset the output directory and remove the stale debug build tree.
///
/// Runs before any template is written. Not transactional: a failure part
/// way through aborts the run with no cleanup guarantee.
pub fn prepare_output_dir(ctx: &GeneratorContext, build_dir_base: &str) -> Result<()> {
    remove_debug_build_dir(&ctx.debug_build_dir(build_dir_base))?;
    remove_generated_files(&ctx.output_dir)?;

    fs::create_dir_all(&ctx.output_dir).map_err(|e| {
        VsgenError::IoError(format!(
            "failed to create output directory '{}': {}",
            ctx.output_dir.display(),
            e
        ))
    })
}

/// Remove the Debug build directory and all of its contents.
fn remove_debug_build_dir(debug_dir: &Path) -> Result<()> {
    if !debug_dir.exists() {
        return Ok(());
    }

    println!("Removing existing Debug build directory: {}", debug_dir.display());
    fs::remove_dir_all(debug_dir).map_err(|e| {
        VsgenError::IoError(format!(
            "failed to remove build directory '{}': {}",
            debug_dir.display(),
            e
        ))
    })
}

/// Remove every plain file directly inside the output directory.
///
/// Directories are kept: the managed output set is file-level only, and
/// user-created subdirectories are not ours to delete.
fn remove_generated_files(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Ok(());
    }

    println!("Removing existing files in output directory: {}", output_dir.display());

    let entries = fs::read_dir(output_dir).map_err(|e| {
        VsgenError::IoError(format!(
            "failed to read output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            VsgenError::IoError(format!(
                "failed to read output directory '{}': {}",
                output_dir.display(),
                e
            ))
        })?;

        let path = entry.path();
        if path.is_file() {
            fs::remove_file(&path).map_err(|e| {
                VsgenError::IoError(format!("failed to remove '{}': {}", path.display(), e))
            })?;
        }
    }

    Ok(())
}
