//! Successor.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Emitter, value_tokens};

impl Emitter<'_> {
    /// `next`: the following constant in declaration order, wrapping around; undefined values go to the first.
    pub(super) fn emit_successor(&self) -> TokenStream {
        let ty = &self.ty;
        let receiver = &self.locals.receiver;
        let bind = self.bind_receiver();
        let distinct = self.group.distinct();
        let arms = distinct.iter().enumerate().map(|(i, c)| {
            let pat = value_tokens(&c.value);
            let next = self.const_path(distinct[(i + 1) % distinct.len()]);
            quote!(#pat => #next,)
        });
        // `distinct` is never empty: collection rejects empty groups.
        let first = distinct.first().map(|c| self.const_path(c));
        let example = match (distinct.first(), distinct.last()) {
            (Some(first), Some(last)) => vec![
                " ```ignore".to_string(),
                format!(" assert_eq!({}.next(), {});", self.const_ref(last), self.const_ref(first)),
                " ```".to_string(),
            ],
            _ => Vec::new(),
        };
        quote! {
            impl #ty {
                /// Returns the next declared constant, wrapping from the last back to the first.
                ///
                /// Values that are not declared constants map to the first constant.
                ///
                /// # Examples
                ///
                #(#[doc = #example])*
                pub fn next(&self) -> Self {
                    #bind
                    match #receiver {
                        #(#arms)*
                        _ => #first,
                    }
                }
            }
        }
    }
}
