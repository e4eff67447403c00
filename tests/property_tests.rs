//! Property-based tests for the enumerator
//!
//! These tests use proptest to check the allocator, the canonical ordering, and the runtime laws of the generated
//! example units across many random inputs.

use std::collections::HashSet;
use std::path::PathBuf;

use enumerator::analysis::{ConstantDecl, sort_canonical};
use enumerator::backend::allocate;
use enumerator::example::{Kind, Kind1, Kind2};
use enumerator::frontend::ConstValue;
use enumerator_core::lang::rust_keywords;
use proptest::prelude::*;

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}"
}

// =============================================================================
// Identifier allocation
// =============================================================================

proptest! {
    /// Property: the allocated name is free and is `base` with `_` prefixes.
    #[test]
    fn allocate_avoids_reserved_and_keywords(base in ident_strategy(), reserved in prop::collection::hash_set(ident_strategy(), 0..8)) {
        let name = allocate(&base, &reserved);
        prop_assert!(!reserved.contains(&name));
        prop_assert!(!rust_keywords::is_keyword(&name));
        prop_assert!(name.ends_with(&base));
        prop_assert!(name[..name.len() - base.len()].chars().all(|c| c == '_'));
    }

    /// Property: allocation is deterministic.
    #[test]
    fn allocate_is_deterministic(base in ident_strategy(), reserved in prop::collection::hash_set(ident_strategy(), 0..8)) {
        prop_assert_eq!(allocate(&base, &reserved), allocate(&base, &reserved));
    }
}

#[test]
fn allocate_keeps_free_names() {
    assert_eq!(allocate("token", &HashSet::new()), "token");
}

// =============================================================================
// Canonical ordering
// =============================================================================

fn decl_strategy() -> impl Strategy<Value = ConstantDecl> {
    ("[A-Z]{1,4}", 0usize..3, 0usize..200, any::<i32>()).prop_map(|(name, file, offset, value)| ConstantDecl {
        name,
        value: ConstValue::Int(value.into()),
        file: PathBuf::from(format!("src/f{}.rs", file)),
        offset,
        associated: false,
    })
}

proptest! {
    /// Property: sorting is independent of the input order.
    #[test]
    fn ordering_is_stable_across_passes(mut decls in prop::collection::vec(decl_strategy(), 0..16)) {
        // Two constants never share a source position.
        let mut seen = HashSet::new();
        decls.retain(|d| seen.insert((d.file.clone(), d.offset)));

        let mut first = decls.clone();
        sort_canonical(&mut first);
        decls.reverse();
        sort_canonical(&mut decls);
        prop_assert_eq!(&first, &decls);
        for pair in first.windows(2) {
            prop_assert!((&pair[0].file, pair[0].offset) <= (&pair[1].file, pair[1].offset));
        }
    }
}

// =============================================================================
// Generated unit laws
// =============================================================================

proptest! {
    /// Property: membership, rendering, and successor agree for any value.
    #[test]
    fn kind_laws_hold_for_any_value(v in any::<i32>()) {
        let k = Kind(v);
        let defined = v == 0 || v == 1;
        prop_assert_eq!(k.is_defined(), defined);
        if defined {
            prop_assert_eq!(k.to_string().parse::<Kind>().unwrap(), k);
            prop_assert_eq!(k.next().next(), k);
        } else {
            prop_assert_eq!(k.to_string(), format!("Kind({})", v));
            prop_assert_eq!(k.next(), Kind1);
            prop_assert!(k.to_string().parse::<Kind>().is_err());
        }
        prop_assert!(k.next() == Kind1 || k.next() == Kind2);
    }

    /// Property: scanning never panics and only yields defined values.
    #[test]
    fn kind_scan_is_total(input in "\\PC{0,16}") {
        let mut k = Kind(-1);
        if k.scan(&mut input.as_bytes()).is_ok() {
            prop_assert!(k.is_defined());
        }
    }
}
