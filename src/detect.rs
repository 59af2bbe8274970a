//! Project-name auto-detection from the build description.
//!
//! The executable base name is recovered from `CMakeLists.txt` by
//! best-effort text scanning, not a parse of the CMake language. Two
//! patterns are recognized, in priority order:
//!
//! 1. an explicit `set(CMAKE_PROJECT_NAME <name>)` assignment;
//! 2. a `project(<name>)` declaration whose argument is a bare literal.
//!
//! A `project(${VAR})` declaration is a variable reference, not a literal
//! name, and yields no result. Any failure here is a soft fallback: the
//! resolver substitutes its literal default instead.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static PROJECT_NAME_SET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"set\s*\(\s*CMAKE_PROJECT_NAME\s+([^\s\)]+)\s*\)").unwrap()
});

static PROJECT_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"project\s*\(\s*([^\s\)]+)\s*\)").unwrap());

/// Detect the project name from a build description file.
///
/// Returns `None` when the file is absent, unreadable, or neither pattern
/// yields a literal name.
pub fn project_name(build_description: &Path) -> Option<String> {
    let content = std::fs::read_to_string(build_description).ok()?;
    project_name_in(&content)
}

/// Detect the project name in build description text.
pub fn project_name_in(content: &str) -> Option<String> {
    if let Some(captures) = PROJECT_NAME_SET.captures(content) {
        return Some(captures[1].to_string());
    }

    if let Some(captures) = PROJECT_DECL.captures(content) {
        let name = &captures[1];
        // A ${...} argument is a variable reference, not a literal name.
        if name.starts_with("${") && name.ends_with('}') {
            return None;
        }
        return Some(name.to_string());
    }

    None
}
