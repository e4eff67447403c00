//! Drift guard.
//!
//! A `const` block indexes a one-element array for every constant: with `(current - declared) != 0` for integers,
//! and with the length and byte differences for text. While the generated unit is fresh every index is zero; once
//! a constant's value changes, const evaluation fails with "index out of bounds" (or an overflow) and the build
//! stops until the unit is regenerated.

use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::LitByte;

use super::{Emitter, value_tokens};
use crate::frontend::ConstValue;

impl Emitter<'_> {
    pub(super) fn emit_drift_guard(&self) -> TokenStream {
        let x = &self.locals.guard;
        let checks = self.group.constants.iter().map(|c| {
            let path = self.const_path(c);
            match &c.value {
                ConstValue::Int(_) => {
                    let v = value_tokens(&c.value);
                    quote!(let _ = #x[((#path.0 - (#v)) != 0) as usize];)
                }
                ConstValue::Text(s) => {
                    let len = Literal::usize_unsuffixed(s.len());
                    let bytes = s.bytes().enumerate().map(|(i, b)| {
                        let i = Literal::usize_unsuffixed(i);
                        let b = LitByte::new(b, Span::call_site());
                        quote!(let _ = #x[(#b as i64 - #path.0.as_bytes()[#i] as i64) as usize];)
                    });
                    quote! {
                        let _ = #x[#path.0.len() - #len];
                        #(#bytes)*
                    }
                }
            }
        });
        quote! {
            const _: () = {
                let #x = [(); 1];
                #(#checks)*
            };
        }
    }
}
