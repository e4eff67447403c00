//! Command implementations for the enumerator CLI.
//!
//! The pipeline is: resolve paths, load the model, locate the target type, collect its constants, synthesize, and
//! write. Only this layer touches the filesystem; everything it calls works on in-memory values.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use enumerator_core::lang::conventions::default_output_file_name;

use super::output::{Destination, write_unit};
use super::{CliError, CliResult, ExitCode};
use crate::analysis::{self, OrderedConstantGroup};
use crate::backend::{self, GenerateConfig};
use crate::frontend::{self, LoadError, SemanticModel, SourceModel};

/// Maximum source file size (10 MB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Parameters of one generation run, after flag and environment resolution.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub input: PathBuf,
    pub with: Vec<PathBuf>,
    pub type_name: Option<String>,
    pub line: usize,
    pub output: Option<PathBuf>,
    pub config: GenerateConfig,
}

/// Generate the unit for one type and write it.
pub fn generate(args: &GenerateArgs) -> CliResult<ExitCode> {
    let input = canonical(&args.input)?;
    let mut files = vec![input.clone()];
    for path in &args.with {
        let path = canonical(path)?;
        if !files.contains(&path) {
            files.push(path);
        }
    }
    for path in &files {
        check_source_size(path)?;
    }

    let model = frontend::load_files(&files).map_err(load_failure)?;
    let (unit, group) = generate_unit(&model, &input, args)?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_path(&input, &group.target.name),
    };
    write_unit(&output, &unit)?;
    if let Destination::File(path) = Destination::parse(&output) {
        tracing::info!(ty = %group.target.name, constants = group.constants.len(), output = %path.display(), "wrote enum helpers");
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the in-memory part of the pipeline against an already-loaded model.
pub fn generate_unit(
    model: &SourceModel,
    input: &Path,
    args: &GenerateArgs,
) -> CliResult<(String, OrderedConstantGroup)> {
    let target = analysis::locate(model, args.type_name.as_deref(), input, args.line)
        .map_err(|e| CliError::failure(format!("error: {}", e)))?;
    let group = analysis::collect(model, &target).map_err(|e| CliError::failure(format!("error: {}", e)))?;
    let reserved = names_in_file(model, &target.file);
    let unit = backend::synthesize(&group, &args.config, &reserved)
        .map_err(|e| CliError::failure(format!("error: {}", e)))?;
    Ok((unit, group))
}

/// Every definition name in `file`, so generated names do not shadow them.
fn names_in_file(model: &SourceModel, file: &Path) -> HashSet<String> {
    let types = model.type_defs().iter().map(|t| (&t.name, &t.position));
    let consts = model.const_defs().iter().map(|c| (&c.name, &c.position));
    let items = model.item_defs().iter().map(|i| (&i.name, &i.position));
    types
        .chain(consts)
        .chain(items)
        .filter(|(_, position)| position.file == file)
        .map(|(name, _)| name.clone())
        .collect()
}

/// `<dir of input>/<type_snake>_enum.rs`.
pub fn default_output_path(input: &Path, type_name: &str) -> PathBuf {
    let file_name = default_output_file_name(type_name.strip_prefix("r#").unwrap_or(type_name));
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn canonical(path: &Path) -> CliResult<PathBuf> {
    fs::canonicalize(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))
}

fn check_source_size(path: &Path) -> CliResult<()> {
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }
    Ok(())
}

/// Render a load error with its source snippet.
fn load_failure(err: LoadError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const KIND_SRC: &str = "pub struct Kind(pub i32);\n\
                            pub const KIND1: Kind = Kind(0);\n\
                            pub const KIND2: Kind = Kind(1);\n";

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/src/types.rs"), "StrKind"),
            PathBuf::from("/src/str_kind_enum.rs")
        );
    }

    #[test]
    fn test_generate_writes_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "kind.rs", KIND_SRC);
        let args = GenerateArgs {
            input,
            ..GenerateArgs::default()
        };
        assert_eq!(generate(&args).unwrap(), ExitCode::SUCCESS);

        let unit = fs::read_to_string(dir.path().join("kind_enum.rs")).unwrap();
        assert!(unit.starts_with("// Code generated by \"enumerator\"; DO NOT EDIT."));
        syn::parse_file(&unit).unwrap();
    }

    #[test]
    fn test_generate_with_extra_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "kind.rs", "pub struct Kind(pub u8);\n");
        let extra = write(dir.path(), "consts.rs", "pub const A: Kind = Kind(1);\n");
        let output = dir.path().join("out.rs");
        let args = GenerateArgs {
            input,
            with: vec![extra],
            output: Some(output.clone()),
            ..GenerateArgs::default()
        };
        generate(&args).unwrap();
        assert!(fs::read_to_string(output).unwrap().contains("f.write_str(\"A\")"));
    }

    #[test]
    fn test_generate_reports_empty_enum() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "kind.rs", "pub struct Kind(pub u8);\n");
        let err = generate(&GenerateArgs {
            input,
            ..GenerateArgs::default()
        })
        .unwrap_err();
        assert!(err.message.contains("has no constants"), "{}", err.message);
        assert!(!dir.path().join("kind_enum.rs").exists());
    }

    #[test]
    fn test_generate_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "kind.rs", "pub struct Kind(\n");
        let err = generate(&GenerateArgs {
            input,
            ..GenerateArgs::default()
        })
        .unwrap_err();
        assert!(err.message.contains("failed to parse"), "{}", err.message);
    }

    #[test]
    fn test_generate_missing_input() {
        let err = generate(&GenerateArgs {
            input: PathBuf::from("/definitely/not/here.rs"),
            ..GenerateArgs::default()
        })
        .unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
