use proc_macro2::Span;
use std::collections::HashMap;
use syn::Attribute;
use syn::spanned::Spanned;

/// Spans of the keys used in `#[sectcfg(...)]` attributes, by key name.
///
/// Lets conflict errors point at the offending key instead of the derive.
pub fn extract_sectcfg_attr_spans(attrs: &[Attribute]) -> HashMap<String, Span> {
    let mut spans = HashMap::new();

    for attr in attrs {
        if !attr.path().is_ident("sectcfg") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                spans.insert(ident.to_string(), meta.path.span());
            }
            if meta.input.peek(syn::Token![=]) {
                let _: syn::Token![=] = meta.input.parse()?;
                let _: syn::Expr = meta.input.parse()?;
            }
            Ok(())
        });
    }

    spans
}
