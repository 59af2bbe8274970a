//! One-pass generation pipeline.
//!
//! Load profile document -> select host sub-profile -> resolve values ->
//! (optional strict coverage check) -> destructive output reset -> render.
//! No loops back, no state between runs: each invocation is a fresh,
//! complete regeneration.

use crate::context::GeneratorContext;
use crate::error::Result;
use crate::host::HostOs;
use crate::output::prepare_output_dir;
use crate::profile::PlatformDocument;
use crate::render;
use crate::resolve::{defaults, keys, resolve_values};

/// Behavior switches for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Fail (exit code 2) when a template references a placeholder with no
    /// resolved value, instead of emitting it verbatim.
    pub strict: bool,
}

/// Run the full generation pipeline for a workspace.
pub fn run(ctx: &GeneratorContext, options: GenerateOptions) -> Result<()> {
    run_for_host(ctx, options, HostOs::detect())
}

/// Run the pipeline for an explicit host class.
///
/// Split out so tests can exercise both OS branches on one machine.
pub fn run_for_host(ctx: &GeneratorContext, options: GenerateOptions, host: HostOs) -> Result<()> {
    let document = PlatformDocument::load(&ctx.profile_path)?;
    let profile = document.select(host);
    let values = resolve_values(&profile, ctx, host);

    if options.strict {
        // Before the reset: drift aborts the run with nothing touched.
        render::verify_coverage(render::builtin(), &values)?;
    }

    let build_dir_base = values.get(keys::BUILD_DIR).unwrap_or(defaults::BUILD_DIR);
    prepare_output_dir(ctx, build_dir_base)?;

    render::render_all(ctx, &values)?;

    println!("Generation complete. Reload window in VS Code if necessary.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VsgenError;
    use crate::test_support::create_test_workspace;
    use std::collections::BTreeMap;
    use std::fs;

    fn read_outputs(ctx: &GeneratorContext) -> BTreeMap<String, String> {
        let mut outputs = BTreeMap::new();
        for template in render::builtin() {
            let path = ctx.output_file(template.name);
            outputs.insert(
                template.name.to_string(),
                fs::read_to_string(&path).unwrap(),
            );
        }
        outputs
    }

    #[test]
    fn test_full_run_writes_all_outputs() {
        let workspace = create_test_workspace();
        let ctx = GeneratorContext::resolve_from(workspace.path());

        run_for_host(&ctx, GenerateOptions::default(), HostOs::Linux).unwrap();

        let outputs = read_outputs(&ctx);
        assert_eq!(outputs.len(), 4);

        // Auto-detected name and derived bin path flow through.
        assert!(outputs["launch.json"].contains("stepper-fw.elf"));
        assert!(outputs["tasks.json"].contains("/opt/tools/gcc-arm/bin:${env:PATH}"));
        assert!(outputs["c_cpp_properties.json"]
            .contains(r#""compilerPath": "/opt/tools/gcc-arm/bin/arm-none-eabi-gcc""#));
    }

    #[test]
    fn test_idempotence() {
        let workspace = create_test_workspace();
        let ctx = GeneratorContext::resolve_from(workspace.path());

        run_for_host(&ctx, GenerateOptions::default(), HostOs::Linux).unwrap();
        let first = read_outputs(&ctx);

        run_for_host(&ctx, GenerateOptions::default(), HostOs::Linux).unwrap();
        let second = read_outputs(&ctx);

        assert_eq!(first, second);
    }

    #[test]
    fn test_destructive_reset_end_to_end() {
        let workspace = create_test_workspace();
        let ctx = GeneratorContext::resolve_from(workspace.path());

        fs::create_dir_all(&ctx.output_dir).unwrap();
        fs::write(ctx.output_dir.join("settings.json"), "{}").unwrap();
        let subdir = ctx.output_dir.join("ltex");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("dictionary.txt"), "word\n").unwrap();

        let debug_dir = workspace.path().join("build").join("Debug");
        fs::create_dir_all(&debug_dir).unwrap();
        fs::write(debug_dir.join("stale.elf"), "elf").unwrap();

        run_for_host(&ctx, GenerateOptions::default(), HostOs::Linux).unwrap();

        assert!(!ctx.output_dir.join("settings.json").exists());
        assert!(subdir.join("dictionary.txt").exists());
        assert!(!debug_dir.exists());
        assert_eq!(read_outputs(&ctx).len(), 4);
    }

    #[test]
    fn test_windows_host_uses_windows_profile_and_kill_command() {
        let workspace = create_test_workspace();
        let ctx = GeneratorContext::resolve_from(workspace.path());

        run_for_host(&ctx, GenerateOptions::default(), HostOs::Windows).unwrap();

        let tasks = fs::read_to_string(ctx.output_file("tasks.json")).unwrap();
        assert!(tasks.contains(r#""command": "taskkill""#));
        assert!(tasks.contains(r#"["/IM","openocd.exe","/F"]"#));
        assert!(tasks.contains("C:/tools/gcc-arm/bin:${env:PATH}"));
    }

    #[test]
    fn test_missing_document_aborts_before_touching_output() {
        let workspace = tempfile::TempDir::new().unwrap();
        let ctx = GeneratorContext::resolve_from(workspace.path());

        let err = run_for_host(&ctx, GenerateOptions::default(), HostOs::Linux).unwrap_err();

        assert!(matches!(err, VsgenError::ConfigError(_)));
        assert!(!ctx.output_dir.exists());
    }

    #[test]
    fn test_strict_mode_passes_for_builtin_vocabulary() {
        let workspace = create_test_workspace();
        let ctx = GeneratorContext::resolve_from(workspace.path());

        run_for_host(&ctx, GenerateOptions { strict: true }, HostOs::Linux).unwrap();

        assert!(ctx.output_file("extensions.json").exists());
    }
}
