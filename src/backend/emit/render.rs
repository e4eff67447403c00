//! Render, RenderBytes, and Membership.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::LitByte;

use super::{Emitter, display_name, value_tokens};
use crate::frontend::ValueKind;

impl Emitter<'_> {
    /// `impl Display`: the constant's name, or `Type(value)` for undefined integer values.
    pub(super) fn emit_render(&self) -> TokenStream {
        let ty = &self.ty;
        let f = &self.locals.formatter;
        let body = match self.group.kind {
            ValueKind::Text => quote!(#f.write_str(self.0)),
            ValueKind::Integer => {
                let receiver = &self.locals.receiver;
                let bind = self.bind_receiver();
                let arms = self.group.distinct().into_iter().map(|c| {
                    let pat = value_tokens(&c.value);
                    let name = display_name(&c.name);
                    quote!(#pat => #f.write_str(#name),)
                });
                let fallback = format!("{}({{}})", self.type_name);
                quote! {
                    #bind
                    match #receiver {
                        #(#arms)*
                        _ => ::std::write!(#f, #fallback, #receiver),
                    }
                }
            }
        };
        quote! {
            impl ::std::fmt::Display for #ty {
                fn fmt(&self, #f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    #body
                }
            }
        }
    }

    /// `bytes`: the rendered form as bytes.
    pub(super) fn emit_render_bytes(&self) -> TokenStream {
        let ty = &self.ty;
        let body = match self.group.kind {
            ValueKind::Text => quote!(self.0.as_bytes().to_vec()),
            ValueKind::Integer => {
                let receiver = &self.locals.receiver;
                let bind = self.bind_receiver();
                let arms = self.group.distinct().into_iter().map(|c| {
                    let pat = value_tokens(&c.value);
                    let bytes = display_name(&c.name)
                        .bytes()
                        .map(|b| LitByte::new(b, Span::call_site()));
                    quote!(#pat => ::std::vec![#(#bytes),*],)
                });
                let fallback = format!("{}({{}})", self.type_name);
                quote! {
                    #bind
                    match #receiver {
                        #(#arms)*
                        _ => ::std::format!(#fallback, #receiver).into_bytes(),
                    }
                }
            }
        };
        quote! {
            impl #ty {
                /// Returns the rendered name as bytes.
                pub fn bytes(&self) -> ::std::vec::Vec<u8> {
                    #body
                }
            }
        }
    }

    /// `is_defined`: whether the value is one of the constants.
    pub(super) fn emit_membership(&self) -> TokenStream {
        let ty = &self.ty;
        let receiver = &self.locals.receiver;
        let bind = self.bind_receiver();
        let pats = self.group.distinct().into_iter().map(|c| value_tokens(&c.value));
        quote! {
            impl #ty {
                /// Returns whether the value is one of the declared constants.
                pub fn is_defined(&self) -> bool {
                    #bind
                    ::std::matches!(#receiver, #(#pats)|*)
                }
            }
        }
    }
}
