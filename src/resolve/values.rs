//! Resolved value map construction.

use crate::context::GeneratorContext;
use crate::detect;
use crate::host::HostOs;
use crate::profile::PlatformProfile;
use std::collections::BTreeMap;
use std::path::Path;

/// Placeholder names recognized by the templates.
///
/// Names are pairwise non-overlapping in their wrapped `${...}` form, so
/// substitution order does not matter.
pub mod keys {
    pub const TOOLCHAIN_GCC: &str = "TOOLCHAIN_GCC";
    pub const TOOLCHAIN_BIN_PATH: &str = "TOOLCHAIN_BIN_PATH";
    pub const GDB_PATH: &str = "GDB_PATH";
    pub const OPENOCD_PATH: &str = "OPENOCD_PATH";
    pub const BUILD_DIR: &str = "BUILD_DIR";
    pub const COMPILE_COMMANDS: &str = "COMPILE_COMMANDS";
    pub const STM32_DEVICE: &str = "STM32_DEVICE";
    pub const STM32_TARGET: &str = "STM32_TARGET";
    pub const ELF_NAME: &str = "ELF_NAME";
    pub const SVD_FILE: &str = "SVD_FILE";
    pub const KILL_OPENOCD_CMD: &str = "KILL_OPENOCD_CMD";
    pub const KILL_OPENOCD_ARGS: &str = "KILL_OPENOCD_ARGS";
}

/// Documented fallback literals for absent profile fields.
pub mod defaults {
    pub const BUILD_DIR: &str = "build";
    pub const COMPILE_COMMANDS: &str = "${workspaceFolder}/build/Debug/compile_commands.json";
    pub const STM32_DEVICE: &str = "STM32L476xx";
    pub const STM32_TARGET: &str = "stm32l4x.cfg";
    pub const ELF_NAME: &str = "firmware";
}

/// The final flat placeholder → value mapping used for substitution.
///
/// Built once per run, immutable afterwards. Deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValues {
    map: BTreeMap<&'static str, String>,
}

impl ResolvedValues {
    /// Value for a placeholder name, if resolved.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Whether a placeholder name has a resolved value.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Iterate over (placeholder name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.map.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Build the complete value map for a selected sub-profile.
///
/// Every placeholder the templates reference resolves to a direct,
/// fallback, auto-detected, or derived value; this never fails.
pub fn resolve_values(
    profile: &PlatformProfile,
    ctx: &GeneratorContext,
    host: HostOs,
) -> ResolvedValues {
    let toolchain_gcc = profile.toolchain_gcc.clone().unwrap_or_default();

    let toolchain_bin_path = match &profile.toolchain_bin_path {
        Some(path) => path.clone(),
        None => derived_bin_path(&toolchain_gcc),
    };

    let elf_name = resolve_elf_name(profile, ctx);
    let kill = host.kill_openocd();

    let mut map = BTreeMap::new();
    map.insert(keys::TOOLCHAIN_GCC, toolchain_gcc);
    map.insert(keys::TOOLCHAIN_BIN_PATH, toolchain_bin_path);
    map.insert(keys::GDB_PATH, profile.gdb.clone().unwrap_or_default());
    map.insert(keys::OPENOCD_PATH, profile.openocd.clone().unwrap_or_default());
    map.insert(
        keys::BUILD_DIR,
        profile
            .build_dir
            .clone()
            .unwrap_or_else(|| defaults::BUILD_DIR.to_string()),
    );
    map.insert(
        keys::COMPILE_COMMANDS,
        profile
            .compile_commands
            .clone()
            .unwrap_or_else(|| defaults::COMPILE_COMMANDS.to_string()),
    );
    map.insert(
        keys::STM32_DEVICE,
        profile
            .stm32_device
            .clone()
            .unwrap_or_else(|| defaults::STM32_DEVICE.to_string()),
    );
    map.insert(
        keys::STM32_TARGET,
        profile
            .stm32_target
            .clone()
            .unwrap_or_else(|| defaults::STM32_TARGET.to_string()),
    );
    map.insert(keys::ELF_NAME, elf_name);
    map.insert(keys::SVD_FILE, profile.svd_file.clone().unwrap_or_default());
    map.insert(keys::KILL_OPENOCD_CMD, kill.command.to_string());
    map.insert(keys::KILL_OPENOCD_ARGS, kill.args.to_string());

    ResolvedValues { map }
}

/// Executable base name: configured, else auto-detected, else the literal default.
fn resolve_elf_name(profile: &PlatformProfile, ctx: &GeneratorContext) -> String {
    if let Some(name) = &profile.elf_name {
        return name.clone();
    }

    match detect::project_name(&ctx.build_description) {
        Some(name) => {
            println!("Auto-detected ELF name from CMakeLists.txt: {}", name);
            name
        }
        None => {
            println!(
                "Could not detect ELF name, using default: {}",
                defaults::ELF_NAME
            );
            defaults::ELF_NAME.to_string()
        }
    }
}

/// Containing directory of the compiler path, or empty when no compiler is
/// configured (meaning: nothing is prefixed onto the search path).
fn derived_bin_path(toolchain_gcc: &str) -> String {
    if toolchain_gcc.is_empty() {
        return String::new();
    }

    Path::new(toolchain_gcc)
        .parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}
