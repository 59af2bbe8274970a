//! Filesystem utilities for vsgen.
//!
//! Provides atomic file writes so that a generated configuration file is
//! never left half-written, even if the process dies mid-run. The run as a
//! whole is still not transactional: an interrupted run can leave a
//! partially-populated output directory.

mod atomic;

pub use atomic::atomic_write_file;
