//! Error types for locating the target type and collecting its constants.
//!
//! Every variant carries the type name or the anchor position, so the CLI can print an actionable message without
//! further context.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::frontend::{Position, ValueKind};

/// How the target type was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// By explicit type name.
    ByName(String),
    /// By the nearest declaration at or after an anchor line.
    ByAnchor { file: PathBuf, line: usize },
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::ByName(name) => write!(f, "no type named `{}`", name),
            Lookup::ByAnchor { file, line } => {
                write!(f, "no declaration at or after {}:{}", file.display(), line)
            }
        }
    }
}

/// Generator-time failure. Any of these aborts the pass before code is synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("type not found: {0}")]
    TypeNotFound(Lookup),

    #[error(
        "the nearest declaration after {}:{line} is {found}, not a type; pass --type or move the anchor",
        .file.display()
    )]
    AmbiguousAnchor { found: String, file: PathBuf, line: usize },

    #[error("type `{type_name}` declared at {position} is not a single-field tuple struct")]
    UnsupportedType { type_name: String, position: Position },

    #[error("type `{type_name}` declared at {position} has no constants")]
    EmptyEnum { type_name: String, position: Position },

    #[error(
        "constant `{constant}` of type `{type_name}` at {position} is {found}, but earlier constants are {expected}"
    )]
    MixedKindInvariantViolation {
        type_name: String,
        constant: String,
        position: Position,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("constant `{constant}` of type `{type_name}` at {position} is not an integer or string literal")]
    NonLiteralConstant {
        type_name: String,
        constant: String,
        position: Position,
    },
}
