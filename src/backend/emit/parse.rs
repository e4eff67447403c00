//! Parse/Scan and the per-type error enum.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Emitter, spellings};

impl Emitter<'_> {
    /// `<Type>Error` with `UnknownLiteral` and `DecodeMismatch`, plus `Display` and `Error` impls.
    pub(super) fn emit_error_type(&self) -> TokenStream {
        let error_ty = &self.error_ty;
        let f = &self.locals.formatter;
        let token = &self.locals.token;
        let raw = &self.locals.raw;
        let doc = format!(" Error returned when text or JSON does not name a `{}` constant.", self.type_name);
        let unknown = format!("unknown {} value: {{}}", self.type_name);
        let mismatch = format!("failed to parse value {{:?}} into {}", self.type_name);
        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub enum #error_ty {
                /// The token is not the name of any constant.
                UnknownLiteral(::std::string::String),
                /// The JSON input is not a quoted constant name.
                DecodeMismatch(::std::vec::Vec<u8>),
            }

            impl ::std::fmt::Display for #error_ty {
                fn fmt(&self, #f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    match self {
                        Self::UnknownLiteral(#token) => ::std::write!(#f, #unknown, #token),
                        Self::DecodeMismatch(#raw) => {
                            ::std::write!(#f, #mismatch, ::std::string::String::from_utf8_lossy(#raw))
                        }
                    }
                }
            }

            impl ::std::error::Error for #error_ty {}
        }
    }

    /// `FromStr` (exact, case-sensitive) and the reader-based `scan`.
    pub(super) fn emit_parse(&self) -> TokenStream {
        let ty = &self.ty;
        let error_ty = &self.error_ty;
        let Self { locals, .. } = self;
        let (s, reader, r, token, buf, used, done, b, text, e) = (
            &locals.input,
            &locals.reader,
            &locals.reader_ty,
            &locals.token,
            &locals.buf,
            &locals.used,
            &locals.done,
            &locals.byte,
            &locals.text,
            &locals.err,
        );
        let arms = spellings(self.group).into_iter().map(|(spelling, c)| {
            let path = self.const_path(c);
            quote!(#spelling => ::std::result::Result::Ok(#path),)
        });
        let eof = format!("expected a {} value", self.type_name);
        quote! {
            impl ::std::str::FromStr for #ty {
                type Err = #error_ty;

                fn from_str(#s: &str) -> ::std::result::Result<Self, Self::Err> {
                    match #s {
                        #(#arms)*
                        _ => ::std::result::Result::Err(#error_ty::UnknownLiteral(#s.to_string())),
                    }
                }
            }

            impl #ty {
                /// Reads one whitespace-delimited token from `reader` and parses it.
                ///
                /// Leading whitespace is skipped and the delimiter after the token is left unread.
                pub fn scan<#r: ::std::io::BufRead + ?Sized>(&mut self, #reader: &mut #r) -> ::std::io::Result<()> {
                    let mut #token = ::std::vec::Vec::new();
                    loop {
                        let #buf = #reader.fill_buf()?;
                        if #buf.is_empty() {
                            break;
                        }
                        let mut #used = 0;
                        let mut #done = false;
                        for &#b in #buf {
                            if #b.is_ascii_whitespace() {
                                if #token.is_empty() {
                                    #used += 1;
                                    continue;
                                }
                                #done = true;
                                break;
                            }
                            #token.push(#b);
                            #used += 1;
                        }
                        #reader.consume(#used);
                        if #done {
                            break;
                        }
                    }
                    if #token.is_empty() {
                        return ::std::result::Result::Err(::std::io::Error::new(::std::io::ErrorKind::UnexpectedEof, #eof));
                    }
                    let #text = ::std::str::from_utf8(&#token)
                        .map_err(|#e| ::std::io::Error::new(::std::io::ErrorKind::InvalidData, #e))?;
                    *self = #text
                        .parse()
                        .map_err(|#e: #error_ty| ::std::io::Error::new(::std::io::ErrorKind::InvalidData, #e))?;
                    ::std::result::Result::Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::tests::group;
    use super::*;
    use crate::backend::idents::NameAllocator;
    use crate::frontend::ConstValue;

    fn render(f: impl Fn(&Emitter<'_>) -> TokenStream, constants: &[(&str, ConstValue)]) -> String {
        let g = group("Kind", constants);
        let mut names = NameAllocator::new(g.names());
        let emitter = Emitter::new(&g, "k", &mut names).unwrap();
        let file: syn::File = syn::parse2(f(&emitter)).unwrap();
        prettyplease::unparse(&file)
    }

    #[test]
    fn test_error_type_messages() {
        let out = render(|e: &Emitter<'_>| e.emit_error_type(), &[("A", ConstValue::Int(0))]);
        assert!(out.contains("pub enum KindError"), "{out}");
        assert!(out.contains(r#""unknown Kind value: {}""#), "{out}");
        assert!(out.contains(r#""failed to parse value {:?} into Kind""#), "{out}");
        assert!(out.contains("impl ::std::error::Error for KindError {}"), "{out}");
    }

    #[test]
    fn test_from_str_matches_names() {
        let out = render(|e: &Emitter<'_>| e.emit_parse(), &[("A", ConstValue::Int(0)), ("B", ConstValue::Int(1))]);
        assert!(out.contains(r#""A" => ::std::result::Result::Ok(A)"#), "{out}");
        assert!(out.contains(r#""B" => ::std::result::Result::Ok(B)"#), "{out}");
        assert!(out.contains("type Err = KindError;"), "{out}");
    }

    #[test]
    fn test_locals_dodge_constant_names() {
        let out = render(|e: &Emitter<'_>| e.emit_parse(), &[("token", ConstValue::Int(0))]);
        assert!(out.contains("let mut _token = ::std::vec::Vec::new();"), "{out}");
    }
}
