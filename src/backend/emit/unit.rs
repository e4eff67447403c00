//! Assemble, check, and format a generated unit.

use std::collections::HashSet;

use quote::quote;

use super::{EmitError, Emitter};
use crate::analysis::OrderedConstantGroup;
use crate::backend::config::GenerateConfig;
use crate::backend::idents::NameAllocator;

/// Synthesize the helper code for `group`.
///
/// `reserved` holds names already in scope where the unit lands (other items of the declaring module); the
/// group's constant names and the target type's name are always reserved. Constructs are emitted in a fixed
/// order: render, bytes, membership, parse/scan, successor, drift guard, encode, decode, then the error type and
/// the optional serde impls.
#[tracing::instrument(skip_all, fields(ty = %group.target.name, count = group.constants.len()))]
pub fn synthesize(
    group: &OrderedConstantGroup,
    config: &GenerateConfig,
    reserved: &HashSet<String>,
) -> Result<String, EmitError> {
    let mut names = NameAllocator::new(reserved.iter().cloned());
    names.reserve(group.target.name.clone());
    for name in group.names() {
        names.reserve(name);
    }

    let receiver = config.receiver_for(&group.target.name);
    let emitter = Emitter::new(group, &receiver, &mut names)?;

    let prelude = config.child_module.then(|| quote!(use super::*;));
    let render = emitter.emit_render();
    let bytes = emitter.emit_render_bytes();
    let membership = emitter.emit_membership();
    let parse = emitter.emit_parse();
    let successor = emitter.emit_successor();
    let guard = emitter.emit_drift_guard();
    let encode = emitter.emit_encode();
    let decode = emitter.emit_decode();
    let error_type = emitter.emit_error_type();
    let serde = config.serde.then(|| emitter.emit_serde());

    let tokens = quote! {
        #prelude
        #render
        #bytes
        #membership
        #parse
        #successor
        #guard
        #encode
        #decode
        #error_type
        #serde
    };
    let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
    let formatted = prettyplease::unparse(&syntax_tree);

    tracing::debug!(bytes = formatted.len(), "synthesized unit");
    Ok(format!("{}{}", header(&config.command, &emitter.type_name), formatted))
}

/// Leading comment of every unit.
pub fn header(command: &str, type_name: &str) -> String {
    format!(
        "// Code generated by \"{command}\"; DO NOT EDIT.\n\
         // An \"index out of bounds\" error in the `const _` block below means the constants of `{type_name}` \
         changed since this file was generated; re-run the command.\n\n"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::tests::group;
    use super::*;
    use crate::frontend::ConstValue;

    fn kind_group() -> OrderedConstantGroup {
        group("Kind", &[("KIND1", ConstValue::Int(0)), ("KIND2", ConstValue::Int(1))])
    }

    fn fn_names(src: &str) -> Vec<String> {
        let file = syn::parse_file(src).unwrap();
        let mut out = Vec::new();
        for item in file.items {
            if let syn::Item::Impl(imp) = item {
                for item in imp.items {
                    if let syn::ImplItem::Fn(f) = item {
                        out.push(f.sig.ident.to_string());
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_unit_is_valid_rust_in_fixed_order() {
        let out = synthesize(&kind_group(), &GenerateConfig::new(), &HashSet::new()).unwrap();
        assert_eq!(
            fn_names(&out),
            vec![
                "fmt",
                "bytes",
                "is_defined",
                "from_str",
                "scan",
                "next",
                "encode_json",
                "decode_json",
                "fmt"
            ]
        );
    }

    #[test]
    fn test_header_names_command() {
        let config = GenerateConfig::new().with_command("enumerator -t Kind");
        let out = synthesize(&kind_group(), &config, &HashSet::new()).unwrap();
        assert!(out.starts_with("// Code generated by \"enumerator -t Kind\"; DO NOT EDIT.\n"));
        assert!(out.contains("constants of `Kind` changed"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let config = GenerateConfig::new();
        let a = synthesize(&kind_group(), &config, &HashSet::new()).unwrap();
        let b = synthesize(&kind_group(), &config, &HashSet::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_child_module_and_serde_options() {
        let config = GenerateConfig::new().with_child_module(true).with_serde(true);
        let out = synthesize(&kind_group(), &config, &HashSet::new()).unwrap();
        assert!(out.contains("use super::*;"));
        assert!(out.contains("impl ::serde::Serialize for Kind"));

        let plain = synthesize(&kind_group(), &GenerateConfig::new(), &HashSet::new()).unwrap();
        assert!(!plain.contains("use super::*;"));
        assert!(!plain.contains("serde"));
    }

    #[test]
    fn test_reserved_names_rename_error_type() {
        let reserved: HashSet<String> = ["KindError".to_string()].into_iter().collect();
        let out = synthesize(&kind_group(), &GenerateConfig::new(), &reserved).unwrap();
        assert!(out.contains("pub enum _KindError"));
    }
}
