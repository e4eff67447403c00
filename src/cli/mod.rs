//! CLI module for the enumerator
//!
//! ## Flags
//!
//! - `-i/--input FILE` - file declaring the target type (env `ENUMERATOR_FILE`)
//! - `-w/--with FILE` - extra files loaded into the same model (repeatable)
//! - `-t/--type NAME` - target type; otherwise the nearest type at or after `--line`
//! - `-o/--output PATH` - destination, `<STDOUT>`, or `<STDERR>`
//!
//! ## Modules
//!
//! - `commands` - the generation pipeline
//! - `output` - output sink
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod output;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::backend::GenerateConfig;
use crate::version::ENUMERATOR_VERSION;
use commands::GenerateArgs;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate string, byte, JSON, and successor helpers for newtype constants
#[derive(Parser, Debug)]
#[command(name = "enumerator")]
#[command(version = ENUMERATOR_VERSION)]
#[command(about = "Generate enum helper code for Rust newtype constants", long_about = None)]
pub struct Cli {
    /// File declaring the target type
    #[arg(short = 'i', long = "input", env = "ENUMERATOR_FILE", value_name = "FILE")]
    pub input: PathBuf,

    /// Extra file to load (constants or impls declared elsewhere)
    #[arg(short = 'w', long = "with", value_name = "FILE")]
    pub with: Vec<PathBuf>,

    /// Target type name (default: the first type at or after --line)
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Anchor line for locating the type
    #[arg(short = 'l', long = "line", env = "ENUMERATOR_LINE", default_value_t = 0, hide = true)]
    pub line: usize,

    /// Name bound to the wrapped value in generated methods (default: first letter of the type, lowercased)
    #[arg(short = 'r', long = "receiver", value_name = "NAME")]
    pub receiver: Option<String>,

    /// Output file, <STDOUT>, or <STDERR> (default: <type>_enum.rs next to the input)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit `use super::*;` so the output can be a child module
    #[arg(long = "child-module")]
    pub child_module: bool,

    /// Also emit serde Serialize/Deserialize impls
    #[arg(long = "serde")]
    pub serde: bool,
}

impl Cli {
    /// Resolve flags into generation arguments; `command_line` is recorded in the output header.
    pub fn into_args(self, command_line: &str) -> GenerateArgs {
        let mut config = GenerateConfig::new()
            .with_command(command_line)
            .with_serde(self.serde)
            .with_child_module(self.child_module);
        if let Some(receiver) = self.receiver {
            config = config.with_receiver(receiver);
        }
        GenerateArgs {
            input: self.input,
            with: self.with,
            type_name: self.type_name,
            line: self.line,
            output: self.output,
            config,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    let command_line = std::iter::once("enumerator".to_string())
        .chain(env::args().skip(1))
        .collect::<Vec<_>>()
        .join(" ");

    match execute(cli, &command_line) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli, command_line: &str) -> CliResult<ExitCode> {
    commands::generate(&cli.into_args(command_line))
}

// ============================================================================
// Tests
// ============================================================================
