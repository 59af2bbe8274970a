//! Platform profile document for vsgen.
//!
//! This module defines the model of `platform.json`: one optional
//! sub-profile per operating-system class, each a flat set of toolchain and
//! project-identity values. The document is authored by the developer and
//! read-only to the generator. Unknown fields are ignored for forward
//! compatibility, and every field is optional; absence triggers
//! auto-detection or a documented default, never a failure.

mod model;
mod operations;


pub use model::{PlatformDocument, PlatformProfile};
