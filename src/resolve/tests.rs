//! Tests for placeholder value resolution.

use crate::context::GeneratorContext;
use crate::host::HostOs;
use crate::profile::PlatformProfile;
use crate::resolve::{keys, resolve_values};
use std::fs;
use tempfile::TempDir;

fn empty_workspace() -> (TempDir, GeneratorContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = GeneratorContext::resolve_from(temp_dir.path());
    (temp_dir, ctx)
}

#[test]
fn test_fallback_totality_for_empty_profile() {
    let (_temp, ctx) = empty_workspace();
    let profile = PlatformProfile::default();

    let values = resolve_values(&profile, &ctx, HostOs::Linux);

    assert_eq!(values.get(keys::TOOLCHAIN_GCC), Some(""));
    assert_eq!(values.get(keys::TOOLCHAIN_BIN_PATH), Some(""));
    assert_eq!(values.get(keys::GDB_PATH), Some(""));
    assert_eq!(values.get(keys::OPENOCD_PATH), Some(""));
    assert_eq!(values.get(keys::BUILD_DIR), Some("build"));
    assert_eq!(
        values.get(keys::COMPILE_COMMANDS),
        Some("${workspaceFolder}/build/Debug/compile_commands.json")
    );
    assert_eq!(values.get(keys::STM32_DEVICE), Some("STM32L476xx"));
    assert_eq!(values.get(keys::STM32_TARGET), Some("stm32l4x.cfg"));
    assert_eq!(values.get(keys::ELF_NAME), Some("firmware"));
    assert_eq!(values.get(keys::SVD_FILE), Some(""));
    assert_eq!(values.len(), 12);
}

#[test]
fn test_direct_values_pass_through() {
    let (_temp, ctx) = empty_workspace();
    let profile = PlatformProfile {
        gdb: Some("/opt/gcc-arm/bin/arm-none-eabi-gdb".to_string()),
        openocd: Some("/usr/local/bin/openocd".to_string()),
        build_dir: Some("out".to_string()),
        stm32_device: Some("STM32F407xx".to_string()),
        svd_file: Some("STM32F407.svd".to_string()),
        ..Default::default()
    };

    let values = resolve_values(&profile, &ctx, HostOs::Linux);

    assert_eq!(
        values.get(keys::GDB_PATH),
        Some("/opt/gcc-arm/bin/arm-none-eabi-gdb")
    );
    assert_eq!(values.get(keys::OPENOCD_PATH), Some("/usr/local/bin/openocd"));
    assert_eq!(values.get(keys::BUILD_DIR), Some("out"));
    assert_eq!(values.get(keys::STM32_DEVICE), Some("STM32F407xx"));
    assert_eq!(values.get(keys::SVD_FILE), Some("STM32F407.svd"));
}

#[test]
fn test_bin_path_derived_from_compiler_path() {
    let (_temp, ctx) = empty_workspace();
    let profile = PlatformProfile {
        toolchain_gcc: Some("/opt/tools/gcc-arm/bin/arm-none-eabi-gcc".to_string()),
        ..Default::default()
    };

    let values = resolve_values(&profile, &ctx, HostOs::Linux);

    assert_eq!(
        values.get(keys::TOOLCHAIN_BIN_PATH),
        Some("/opt/tools/gcc-arm/bin")
    );
}

#[test]
fn test_explicit_bin_path_wins_over_derivation() {
    let (_temp, ctx) = empty_workspace();
    let profile = PlatformProfile {
        toolchain_gcc: Some("/opt/tools/gcc-arm/bin/arm-none-eabi-gcc".to_string()),
        toolchain_bin_path: Some("/custom/bin".to_string()),
        ..Default::default()
    };

    let values = resolve_values(&profile, &ctx, HostOs::Linux);

    assert_eq!(values.get(keys::TOOLCHAIN_BIN_PATH), Some("/custom/bin"));
}

#[test]
fn test_configured_elf_name_wins_over_detection() {
    let (temp_dir, ctx) = empty_workspace();
    fs::write(
        temp_dir.path().join("CMakeLists.txt"),
        "project(detected-name)\n",
    )
    .unwrap();

    let profile = PlatformProfile {
        elf_name: Some("configured-name".to_string()),
        ..Default::default()
    };

    let values = resolve_values(&profile, &ctx, HostOs::Linux);
    assert_eq!(values.get(keys::ELF_NAME), Some("configured-name"));
}

#[test]
fn test_elf_name_auto_detected_from_build_description() {
    let (temp_dir, ctx) = empty_workspace();
    fs::write(
        temp_dir.path().join("CMakeLists.txt"),
        "set(CMAKE_PROJECT_NAME stepper-fw)\n",
    )
    .unwrap();

    let values = resolve_values(&PlatformProfile::default(), &ctx, HostOs::Linux);
    assert_eq!(values.get(keys::ELF_NAME), Some("stepper-fw"));
}

#[test]
fn test_elf_name_falls_back_when_detection_fails() {
    let (temp_dir, ctx) = empty_workspace();
    fs::write(
        temp_dir.path().join("CMakeLists.txt"),
        "project(${CMAKE_PROJECT_NAME})\n",
    )
    .unwrap();

    let values = resolve_values(&PlatformProfile::default(), &ctx, HostOs::Linux);
    assert_eq!(values.get(keys::ELF_NAME), Some("firmware"));
}

#[test]
fn test_kill_command_follows_host_class() {
    let (_temp, ctx) = empty_workspace();
    let profile = PlatformProfile::default();

    let linux = resolve_values(&profile, &ctx, HostOs::Linux);
    assert_eq!(linux.get(keys::KILL_OPENOCD_CMD), Some("pkill"));
    assert_eq!(linux.get(keys::KILL_OPENOCD_ARGS), Some(r#""-f","openocd""#));

    let windows = resolve_values(&profile, &ctx, HostOs::Windows);
    assert_eq!(windows.get(keys::KILL_OPENOCD_CMD), Some("taskkill"));
    assert_eq!(
        windows.get(keys::KILL_OPENOCD_ARGS),
        Some(r#""/IM","openocd.exe","/F""#)
    );
}

#[test]
fn test_iteration_order_is_deterministic() {
    let (_temp, ctx) = empty_workspace();
    let profile = PlatformProfile::default();

    let first: Vec<_> = resolve_values(&profile, &ctx, HostOs::Linux)
        .iter()
        .map(|(k, _)| k)
        .collect();
    let second: Vec<_> = resolve_values(&profile, &ctx, HostOs::Linux)
        .iter()
        .map(|(k, _)| k)
        .collect();

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(first, sorted);
}
