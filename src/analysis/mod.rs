//! Analysis passes over a semantic model.
//!
//! - [`locate`]: find the target type by name or anchor line
//! - [`collect`]: gather its constants into an [`OrderedConstantGroup`]
//!
//! Both passes are pure functions of the model; they never read files.

pub mod collect;
pub mod errors;
pub mod locate;

pub use collect::{collect, sort_canonical};
pub use errors::{AnalysisError, Lookup};
pub use locate::locate;

use std::path::PathBuf;

use crate::frontend::{ConstValue, Position, TypeDef, TypeId, ValueKind};

/// The resolved target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub id: TypeId,
    pub name: String,
    pub file: PathBuf,
    pub line: usize,
    column: usize,
    offset: usize,
}

impl TypeDecl {
    pub fn from_def(def: &TypeDef) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            file: def.position.file.clone(),
            line: def.position.line,
            column: def.position.column,
            offset: def.position.offset,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.file.clone(), self.line, self.column, self.offset)
    }
}

/// One member of a constant group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDecl {
    pub name: String,
    pub value: ConstValue,
    pub file: PathBuf,
    pub offset: usize,
    /// Declared in an inherent `impl` of the target, so generated code must name it `Type::NAME`.
    pub associated: bool,
}

/// The target type with its constants in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedConstantGroup {
    pub target: TypeDecl,
    pub kind: ValueKind,
    pub constants: Vec<ConstantDecl>,
}

impl OrderedConstantGroup {
    /// Constants whose value was not already taken by an earlier constant.
    ///
    /// Later aliases of a value are not dispatched on by render, membership, or successor.
    pub fn distinct(&self) -> Vec<&ConstantDecl> {
        let mut seen = Vec::new();
        self.constants
            .iter()
            .filter(|c| {
                if seen.contains(&&c.value) {
                    false
                } else {
                    seen.push(&c.value);
                    true
                }
            })
            .collect()
    }

    /// Names of every constant, for identifier reservation.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(|c| c.name.as_str())
    }
}
