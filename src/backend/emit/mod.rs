//! Synthesize the helper code for one constant group.
//!
//! [`synthesize`] builds every construct as a `syn`-checked token stream and formats it with `prettyplease`. The
//! submodules each own one group of constructs; `mod.rs` holds the shared [`Emitter`] state: the group, the target
//! type's identifiers, and the collision-free local names.
//!
//! ## Notes
//!
//! - Generated code uses absolute paths (`::std::...`) and no imports, so it can be `include!`d into any module.
//! - Every method binds the wrapped value once (`let k = self.0;`) and dispatches with `match` on literal patterns,
//!   so the target type needs no derives.
//! - Output is a pure function of the group and the config: the same input yields byte-identical text.
//!
//! ## See also
//!
//! - [`render`]: `Display`, `bytes`, `is_defined`
//! - [`parse`]: the error type, `FromStr`, `scan`
//! - [`cycle`]: `next`
//! - [`guard`]: the compile-time drift guard
//! - [`json`]: `encode_json`, `decode_json`, optional serde impls
//! - [`unit`]: assembly, formatting, and the header

mod cycle;
mod errors;
mod guard;
mod json;
mod parse;
mod render;
mod unit;

pub use errors::EmitError;
pub use unit::synthesize;

use enumerator_core::lang::conventions::ERROR_TYPE_SUFFIX;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use super::idents::NameAllocator;
use crate::analysis::{ConstantDecl, OrderedConstantGroup};
use crate::frontend::ConstValue;

/// Local names introduced by generated code.
#[derive(Debug)]
struct Locals {
    receiver: Ident,
    formatter: Ident,
    input: Ident,
    reader: Ident,
    reader_ty: Ident,
    token: Ident,
    buf: Ident,
    used: Ident,
    done: Ident,
    byte: Ident,
    text: Ident,
    err: Ident,
    raw: Ident,
    guard: Ident,
    serializer: Ident,
    serializer_ty: Ident,
    deserializer: Ident,
    deserializer_ty: Ident,
}

/// Shared state for emitting one unit.
struct Emitter<'g> {
    group: &'g OrderedConstantGroup,
    /// The target type, as written in generated code.
    ty: Ident,
    /// The target type's name, as shown in messages.
    type_name: String,
    error_ty: Ident,
    locals: Locals,
}

impl<'g> Emitter<'g> {
    fn new(group: &'g OrderedConstantGroup, receiver: &str, names: &mut NameAllocator) -> Result<Self, EmitError> {
        let receiver = names.allocate(receiver);
        let receiver = checked_ident(&receiver)?;
        let type_name = display_name(&group.target.name).to_string();
        let error_ty = ident(&names.allocate(&format!("{}{}", type_name, ERROR_TYPE_SUFFIX)));
        let mut local = |base: &str| ident(&names.allocate(base));
        let locals = Locals {
            receiver,
            formatter: local("f"),
            input: local("s"),
            reader: local("reader"),
            reader_ty: local("R"),
            token: local("token"),
            buf: local("buf"),
            used: local("used"),
            done: local("done"),
            byte: local("b"),
            text: local("text"),
            err: local("e"),
            raw: local("raw"),
            guard: local("x"),
            serializer: local("serializer"),
            serializer_ty: local("S"),
            deserializer: local("deserializer"),
            deserializer_ty: local("D"),
        };
        Ok(Self {
            group,
            ty: ident(&group.target.name),
            type_name,
            error_ty,
            locals,
        })
    }

    /// Expression naming constant `c` (`KIND1` or `Kind::KIND1`).
    fn const_path(&self, c: &ConstantDecl) -> TokenStream {
        let name = ident(&c.name);
        if c.associated {
            let ty = &self.ty;
            quote!(#ty::#name)
        } else {
            quote!(#name)
        }
    }

    /// Constant `c` as written in docs and messages.
    fn const_ref(&self, c: &ConstantDecl) -> String {
        if c.associated {
            format!("{}::{}", self.type_name, display_name(&c.name))
        } else {
            display_name(&c.name).to_string()
        }
    }

    /// `let k = self.0;`
    fn bind_receiver(&self) -> TokenStream {
        let receiver = &self.locals.receiver;
        quote!(let #receiver = self.0;)
    }
}

/// Identifier from a name produced by `syn` or the allocator; `r#` names become raw identifiers.
fn ident(name: &str) -> Ident {
    match name.strip_prefix("r#") {
        Some(raw) => Ident::new_raw(raw, Span::call_site()),
        None => Ident::new(name, Span::call_site()),
    }
}

/// Like [`ident`], for names that did not come from parsed source.
fn checked_ident(name: &str) -> Result<Ident, EmitError> {
    syn::parse_str::<Ident>(name).map_err(|_| EmitError::InvalidIdentifier(name.to_string()))
}

/// Name as shown to users (`r#type` shows as `type`).
fn display_name(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

/// Literal tokens of a constant value, usable both as expression and as pattern.
fn value_tokens(value: &ConstValue) -> TokenStream {
    match value {
        ConstValue::Int(v) => {
            let lit = Literal::u128_unsuffixed(v.unsigned_abs());
            if *v < 0 { quote!(-#lit) } else { quote!(#lit) }
        }
        ConstValue::Text(s) => {
            let lit = Literal::string(s);
            quote!(#lit)
        }
    }
}

/// Strings a constant is spelled as: its name and, for text constants that differ, its value.
///
/// Each spelling maps to the first constant (canonical order) that claims it.
fn spellings(group: &OrderedConstantGroup) -> Vec<(String, &ConstantDecl)> {
    let mut out: Vec<(String, &ConstantDecl)> = Vec::new();
    let mut push = |spelling: &str, c| {
        if !out.iter().any(|(s, _)| s == spelling) {
            out.push((spelling.to_string(), c));
        }
    };
    for c in &group.constants {
        push(display_name(&c.name), c);
    }
    for c in &group.constants {
        if let ConstValue::Text(value) = &c.value {
            push(value, c);
        }
    }
    out
}
