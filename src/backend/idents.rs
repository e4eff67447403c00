//! Collision-free identifiers for synthesized code.
//!
//! Generated code is spliced into the module that declares the target type, next to the user's constants. A local
//! binding that shares a name with a constant in scope would be read as a constant pattern, so every name the
//! generator introduces goes through [`allocate`].

use std::collections::HashSet;

use enumerator_core::lang::conventions::ESCAPE_PREFIX;
use enumerator_core::lang::rust_keywords;

/// Return `base`, prefixed with `_` as many times as needed so it is neither a Rust keyword nor in `reserved`.
pub fn allocate(base: &str, reserved: &HashSet<String>) -> String {
    let mut name = base.to_string();
    while rust_keywords::is_keyword(&name) || reserved.contains(&name) {
        name.insert_str(0, ESCAPE_PREFIX);
    }
    name
}

/// Allocates a sequence of names, reserving each one as it is handed out.
#[derive(Debug, Clone, Default)]
pub struct NameAllocator {
    reserved: HashSet<String>,
}

impl NameAllocator {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn reserve(&mut self, name: impl Into<String>) {
        self.reserved.insert(name.into());
    }

    /// Allocate a name from `base` and reserve it.
    pub fn allocate(&mut self, base: &str) -> String {
        let name = allocate(base, &self.reserved);
        self.reserved.insert(name.clone());
        name
    }
}
