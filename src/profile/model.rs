//! Platform document and sub-profile struct definitions.

use serde::Deserialize;

/// The platform profile document (`platform.json`).
///
/// Top-level keys name operating-system classes; each value is the
/// sub-profile for that class. Missing keys fall back at selection time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlatformDocument {
    pub linux: Option<PlatformProfile>,
    pub windows: Option<PlatformProfile>,
}

/// Configuration values for one operating-system class.
///
/// Field names match the document format. Every field is optional:
/// the resolver supplies auto-detected, derived, or literal defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlatformProfile {
    /// Absolute path to the cross-compiler binary.
    pub toolchain_gcc: Option<String>,

    /// Toolchain bin directory prefixed onto PATH for build tasks.
    /// Derived from `toolchain_gcc` when absent.
    pub toolchain_bin_path: Option<String>,

    /// Absolute path to the debugger (arm-none-eabi-gdb).
    pub gdb: Option<String>,

    /// Absolute path to the OpenOCD flashing/debug-server binary.
    pub openocd: Option<String>,

    /// Build output directory, relative to the workspace root.
    pub build_dir: Option<String>,

    /// Path to compile_commands.json for IntelliSense.
    pub compile_commands: Option<String>,

    /// Target device define (e.g. STM32L476xx).
    pub stm32_device: Option<String>,

    /// OpenOCD target chip-config filename (e.g. stm32l4x.cfg).
    pub stm32_target: Option<String>,

    /// Executable base name. Auto-detected from CMakeLists.txt when absent.
    pub elf_name: Option<String>,

    /// Path to the SVD file for peripheral register views.
    pub svd_file: Option<String>,
}
