//! Example constant groups with their generated helpers checked in.
//!
//! The units next to this file were produced by the CLI and are pulled in with `include!`, the same way a user
//! crate consumes them:
//!
//! ```text
//! enumerator -i src/example/mod.rs -t Kind
//! enumerator -i src/example/mod.rs -t StrKind
//! ```

#![allow(non_upper_case_globals)]

/// An integer-valued group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kind(pub i32);

pub const Kind1: Kind = Kind(0);
pub const Kind2: Kind = Kind(1);

/// A text-valued group declared with associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrKind(pub &'static str);

impl StrKind {
    pub const Hello: StrKind = Self("Hello");
    pub const World: StrKind = Self("World");
}

include!("kind_enum.rs");
include!("str_kind_enum.rs");
