//! Enumerator backend: turn an ordered constant group into Rust source.
//!
//! - `idents`: collision-free names for synthesized bindings
//! - `config`: synthesis options
//! - `emit`: the code synthesizer

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod emit;
pub mod idents;

pub use config::GenerateConfig;
pub use emit::{EmitError, synthesize};
pub use idents::{NameAllocator, allocate};
