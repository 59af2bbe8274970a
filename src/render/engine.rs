//! Placeholder substitution and coverage checking.

use super::templates::{Template, builtin};
use crate::context::GeneratorContext;
use crate::error::{Result, VsgenError};
use crate::fs::atomic_write_file;
use crate::resolve::ResolvedValues;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Shape of the generator's placeholder vocabulary.
///
/// Upper-snake names only; VS Code's own variables (`${workspaceFolder}`,
/// `${env:PATH}`, `$gcc`) never match and are left for the editor.
static VOCABULARY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Z][A-Z0-9_]*)\}").unwrap());

/// Replace every occurrence of every resolved placeholder in a template body.
///
/// Placeholders without a resolved value are left as literal text; the
/// engine is total and treats that as the caller's concern (see
/// [`verify_coverage`] for the strict alternative).
pub fn substitute(text: &str, values: &ResolvedValues) -> String {
    let mut out = text.to_string();
    for (name, value) in values.iter() {
        out = out.replace(&format!("${{{}}}", name), value);
    }
    out
}

/// Generator-vocabulary placeholder names referenced by a template body.
pub fn placeholder_names(text: &str) -> BTreeSet<String> {
    VOCABULARY_TOKEN
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Strict-mode pass: every vocabulary placeholder referenced by any template
/// must have a resolved value.
///
/// Runs before the destructive reset so that drift between the template
/// vocabulary and the resolver aborts the run with nothing touched.
pub fn verify_coverage(templates: &[Template], values: &ResolvedValues) -> Result<()> {
    let mut unresolved = Vec::new();

    for template in templates {
        for name in placeholder_names(template.body) {
            if !values.contains(&name) {
                unresolved.push(format!("${{{}}} in {}", name, template.name));
            }
        }
    }

    if unresolved.is_empty() {
        return Ok(());
    }

    Err(VsgenError::ValidationError(format!(
        "unresolved template placeholder(s): {}",
        unresolved.join(", ")
    )))
}

/// Render every template into the output directory.
///
/// One write per template, at the template's own name, overwriting
/// unconditionally. Returns the written paths in template order.
pub fn render_all(ctx: &GeneratorContext, values: &ResolvedValues) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for template in builtin() {
        let rendered = substitute(template.body, values);
        let path = ctx.output_file(template.name);
        atomic_write_file(&path, &rendered)?;
        println!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
