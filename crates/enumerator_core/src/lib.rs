//! Provide the shared, pure vocabulary used by the enumerator generator.
//!
//! This crate is intentionally small and dependency-free. It holds the Rust keyword table used when
//! escaping synthesized identifiers and the naming conventions shared by the CLI and the code
//! synthesizer.
//!
//! ## Notes
//!
//! - No IO, no global state, and no generator-specific types.

pub mod lang;
