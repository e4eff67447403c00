//! Output sink for generated units.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use enumerator_core::lang::conventions::{STDERR_DESTINATION, STDOUT_DESTINATION};

use super::{CliError, CliResult};

/// Where a generated unit goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    Stdout,
    Stderr,
    File(&'a Path),
}

impl<'a> Destination<'a> {
    /// Classify an output name; `<STDOUT>` and `<STDERR>` select the standard streams.
    pub fn parse(name: &'a Path) -> Self {
        match name.to_str() {
            Some(STDOUT_DESTINATION) => Destination::Stdout,
            Some(STDERR_DESTINATION) => Destination::Stderr,
            _ => Destination::File(name),
        }
    }
}

/// Open the sink for `name`, creating or truncating a file destination.
pub fn open_output(name: &Path) -> CliResult<Box<dyn Write>> {
    match Destination::parse(name) {
        Destination::Stdout => Ok(Box::new(io::stdout())),
        Destination::Stderr => Ok(Box::new(io::stderr())),
        Destination::File(path) => {
            let file = File::create(path)
                .map_err(|e| CliError::failure(format!("Cannot create output file '{}': {}", path.display(), e)))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Write `unit` to `name` in one piece.
pub fn write_unit(name: &Path, unit: &str) -> CliResult<()> {
    let mut sink = open_output(name)?;
    sink.write_all(unit.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(|e| CliError::failure(format!("Error writing '{}': {}", name.display(), e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_parse() {
        assert_eq!(Destination::parse(Path::new("<STDOUT>")), Destination::Stdout);
        assert_eq!(Destination::parse(Path::new("<STDERR>")), Destination::Stderr);
        assert_eq!(
            Destination::parse(Path::new("kind_enum.rs")),
            Destination::File(Path::new("kind_enum.rs"))
        );
    }

    #[test]
    fn test_write_unit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kind_enum.rs");
        write_unit(&path, "// unit\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// unit\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_unit(&dir.path().join("missing/kind_enum.rs"), "").unwrap_err();
        assert!(err.message.starts_with("Cannot create output file"));
    }
}
