//! Enumerator front end
//!
//! This module turns Rust source files into a queryable semantic model:
//! - `loader`: parses files with `syn` and records definitions with positions
//! - `model`: the definition tables and the `SemanticModel` query trait
//! - `const_eval`: literal evaluation of constant initializers
//! - `diagnostics`: load errors with source snippets

pub mod const_eval;
pub mod diagnostics;
pub mod loader;
pub mod model;

pub use diagnostics::LoadError;
pub use loader::{load_files, load_sources};
pub use model::{
    ConstDef, ConstOwner, ConstValue, Definition, IntType, ItemDef, ItemKind, Position, SemanticModel, SourceModel,
    TypeDef, TypeId, TypeShape, ValueKind,
};
