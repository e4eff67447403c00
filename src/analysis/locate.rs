//! Type locator: resolve the target type by name or by anchor line.

use std::path::Path;

use super::errors::{AnalysisError, Lookup};
use super::TypeDecl;
use crate::frontend::{Definition, SemanticModel, TypeDef, TypeShape};

/// Find the target type.
///
/// With `name`, any type definition with that name is returned. Without it, the nearest definition at or after
/// `anchor_line` in `anchor_file` must be a type. When several definitions share the nearest line, a type wins,
/// then the lowest column. Either way the type must be a single-field tuple struct.
#[tracing::instrument(skip_all, fields(name = ?name, file = %anchor_file.display(), line = anchor_line))]
pub fn locate<M: SemanticModel + ?Sized>(
    model: &M,
    name: Option<&str>,
    anchor_file: &Path,
    anchor_line: usize,
) -> Result<TypeDecl, AnalysisError> {
    if let Some(name) = name {
        return model
            .find_type_by_name(name)
            .ok_or_else(|| AnalysisError::TypeNotFound(Lookup::ByName(name.to_string())))
            .and_then(newtype);
    }

    let found = model.find_in_file_after_line(anchor_file, anchor_line);
    let Some(nearest_line) = found.first().map(|d| d.position().line) else {
        return Err(AnalysisError::TypeNotFound(Lookup::ByAnchor {
            file: anchor_file.to_path_buf(),
            line: anchor_line,
        }));
    };
    let on_line: Vec<&Definition<'_>> = found.iter().filter(|d| d.position().line == nearest_line).collect();

    if let Some(Definition::Type(ty)) = on_line.iter().find(|d| d.is_type()) {
        tracing::debug!(ty = %ty.name, line = nearest_line, "located type by anchor");
        return newtype(ty);
    }
    // Non-empty: `nearest_line` came from `found`.
    let found = on_line.first().map(|d| d.describe()).unwrap_or_default();
    Err(AnalysisError::AmbiguousAnchor {
        found,
        file: anchor_file.to_path_buf(),
        line: anchor_line,
    })
}

fn newtype(def: &TypeDef) -> Result<TypeDecl, AnalysisError> {
    match def.shape {
        TypeShape::Newtype => Ok(TypeDecl::from_def(def)),
        TypeShape::Other => Err(AnalysisError::UnsupportedType {
            type_name: def.name.clone(),
            position: def.position.clone(),
        }),
    }
}
