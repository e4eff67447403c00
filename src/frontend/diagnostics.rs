//! Diagnostics for loading sources into a semantic model.
//!
//! Parse failures carry the file text so `miette` can render the offending line with a label.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Error while reading or parsing a source file.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("cannot read '{}'", .path.display())]
    #[diagnostic(code(enumerator::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {message}", .path.display())]
    #[diagnostic(code(enumerator::parse), help("the input must be valid Rust source"))]
    Parse {
        path: PathBuf,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}
