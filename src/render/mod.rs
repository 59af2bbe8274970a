//! Template substitution engine for vsgen.
//!
//! Holds the fixed set of embedded templates and renders each one by literal
//! replacement of the `${NAME}` placeholders it recognizes. Placeholders
//! outside the generator's vocabulary, including the editor's own variables
//! (`${workspaceFolder}`, `${env:PATH}`), pass through verbatim.

mod engine;
mod templates;


pub use engine::{placeholder_names, render_all, substitute, verify_coverage};
pub use templates::{Template, builtin};
