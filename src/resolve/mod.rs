//! Placeholder value resolution for vsgen.
//!
//! Turns the selected sub-profile into the complete placeholder → value map
//! used for substitution: direct pass-through values, documented fallback
//! literals, the auto-detected executable name, the derived toolchain bin
//! directory, and the host-conditional kill command.

mod values;

#[cfg(test)]
mod tests;

pub use values::{ResolvedValues, defaults, keys, resolve_values};
