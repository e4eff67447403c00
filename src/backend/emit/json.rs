//! StructuredEncode, StructuredDecode, and the optional serde impls.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::LitByteStr;

use super::{Emitter, spellings};

impl Emitter<'_> {
    /// `encode_json`: the rendered bytes wrapped in double quotes.
    pub(super) fn emit_encode(&self) -> TokenStream {
        let ty = &self.ty;
        let raw = &self.locals.raw;
        quote! {
            impl #ty {
                /// Encodes the value as a JSON string.
                pub fn encode_json(&self) -> ::std::vec::Vec<u8> {
                    let mut #raw = ::std::vec::Vec::new();
                    #raw.push(b'"');
                    #raw.extend_from_slice(&self.bytes());
                    #raw.push(b'"');
                    #raw
                }
            }
        }
    }

    /// `decode_json`: exact match of the raw bytes against each quoted spelling.
    pub(super) fn emit_decode(&self) -> TokenStream {
        let ty = &self.ty;
        let error_ty = &self.error_ty;
        let raw = &self.locals.raw;
        let arms = spellings(self.group).into_iter().map(|(spelling, c)| {
            let quoted = LitByteStr::new(format!("\"{}\"", spelling).as_bytes(), Span::call_site());
            let path = self.const_path(c);
            quote!(#quoted => #path,)
        });
        quote! {
            impl #ty {
                /// Decodes a JSON string produced by [`Self::encode_json`].
                pub fn decode_json(&mut self, #raw: &[u8]) -> ::std::result::Result<(), #error_ty> {
                    *self = match #raw {
                        #(#arms)*
                        _ => return ::std::result::Result::Err(#error_ty::DecodeMismatch(#raw.to_vec())),
                    };
                    ::std::result::Result::Ok(())
                }
            }
        }
    }

    /// `serde::Serialize` and `serde::Deserialize` through render and parse.
    pub(super) fn emit_serde(&self) -> TokenStream {
        let ty = &self.ty;
        let (serializer, s) = (&self.locals.serializer, &self.locals.serializer_ty);
        let (deserializer, d) = (&self.locals.deserializer, &self.locals.deserializer_ty);
        let text = &self.locals.text;
        quote! {
            impl ::serde::Serialize for #ty {
                fn serialize<#s: ::serde::Serializer>(&self, #serializer: #s) -> ::std::result::Result<#s::Ok, #s::Error> {
                    #serializer.collect_str(self)
                }
            }

            impl<'de> ::serde::Deserialize<'de> for #ty {
                fn deserialize<#d: ::serde::Deserializer<'de>>(#deserializer: #d) -> ::std::result::Result<Self, #d::Error> {
                    let #text = <::std::string::String as ::serde::Deserialize>::deserialize(#deserializer)?;
                    #text.parse().map_err(::serde::de::Error::custom)
                }
            }
        }
    }
}
