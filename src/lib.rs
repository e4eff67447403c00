#![forbid(unsafe_code)]
//! Enumerator: enum helpers for Rust newtype constants
//!
//! Given a tuple newtype and a set of constants of that type, the enumerator generates rendering, parsing, JSON,
//! membership, and successor operations plus a compile-time guard that fails the build when the constants drift
//! from the generated code.
//!
//! The pipeline is split the usual way:
//!
//! - `frontend`: load Rust sources into a semantic model
//! - `analysis`: locate the target type and collect its constants in canonical order
//! - `backend`: synthesize and format the generated unit
//! - `cli`: flags, file IO, and the output sink
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod analysis;
pub mod backend;
pub mod cli;
pub mod example;
pub mod frontend;
pub mod version;

pub use analysis::{AnalysisError, OrderedConstantGroup, collect, locate};
pub use backend::{EmitError, GenerateConfig, synthesize};
pub use frontend::{LoadError, SemanticModel, SourceModel, load_sources};
