//! Constant collector: gather the constants of one type and put them in canonical order.
//!
//! ## Notes
//!
//! - Matching is nominal: a constant belongs to the group only when its declared type resolved to the target's
//!   `TypeId`. Constants of aliases or other same-named types are not members.
//! - The first retained constant fixes the group's [`ValueKind`]; any later constant of another kind fails the whole
//!   pass.
//! - Canonical order is `(file, offset)`, with the name as a final key so the order is total.

use enumerator_core::lang::conventions::PLACEHOLDER_IDENT;

use super::errors::AnalysisError;
use super::{ConstantDecl, OrderedConstantGroup, TypeDecl};
use crate::frontend::{ConstOwner, SemanticModel, ValueKind};

/// Collect the constant group of `target`.
#[tracing::instrument(skip_all, fields(ty = %target.name))]
pub fn collect<M: SemanticModel + ?Sized>(model: &M, target: &TypeDecl) -> Result<OrderedConstantGroup, AnalysisError> {
    let mut kind: Option<ValueKind> = None;
    let mut constants = Vec::new();

    for def in model.constants_of_type(target.id) {
        if def.name == PLACEHOLDER_IDENT {
            tracing::debug!(position = %def.position, "skipping placeholder constant");
            continue;
        }
        let Some(value) = def.value.clone() else {
            return Err(AnalysisError::NonLiteralConstant {
                type_name: target.name.clone(),
                constant: def.name.clone(),
                position: def.position.clone(),
            });
        };
        match kind {
            None => kind = Some(value.kind()),
            Some(expected) if expected != value.kind() => {
                return Err(AnalysisError::MixedKindInvariantViolation {
                    type_name: target.name.clone(),
                    constant: def.name.clone(),
                    position: def.position.clone(),
                    expected,
                    found: value.kind(),
                });
            }
            Some(_) => {}
        }
        constants.push(ConstantDecl {
            name: def.name.clone(),
            value,
            file: def.position.file.clone(),
            offset: def.position.offset,
            associated: matches!(def.owner, ConstOwner::Associated(_)),
        });
    }

    let Some(kind) = kind else {
        return Err(AnalysisError::EmptyEnum {
            type_name: target.name.clone(),
            position: target.position(),
        });
    };

    sort_canonical(&mut constants);
    tracing::debug!(count = constants.len(), %kind, "collected constants");
    Ok(OrderedConstantGroup {
        target: target.clone(),
        kind,
        constants,
    })
}

/// Sort into canonical enumeration order.
pub fn sort_canonical(constants: &mut [ConstantDecl]) {
    constants.sort_by(|a, b| (&a.file, a.offset, &a.name).cmp(&(&b.file, b.offset, &b.name)));
}
