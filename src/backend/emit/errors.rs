//! Error types for code synthesis.
//!
//! Synthesis of a well-formed constant group cannot fail on its own; these errors surface bad options (an invalid
//! receiver name) or a bug in the token builders caught when the unit is re-parsed.

use thiserror::Error;

/// Error while synthesizing a generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("`{0}` is not a valid Rust identifier")]
    InvalidIdentifier(String),

    #[error("syn parse error: {0}")]
    SynParse(String),
}
