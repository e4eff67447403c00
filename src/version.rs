//! Enumerator version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time so the CLI `--version` output and
//! any tooling agree on one value.

/// The enumerator version string (for example, `0.1.0`).
pub const ENUMERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
