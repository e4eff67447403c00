//! Rust language vocabulary for code generation.
//!
//! ## Examples
//! ```rust
//! use enumerator_core::lang::{conventions, rust_keywords};
//!
//! assert!(rust_keywords::is_keyword("match"));
//! assert_eq!(conventions::default_receiver_name("Kind"), "k");
//! ```

pub mod conventions;
pub mod rust_keywords;
