use darling::FromDeriveInput;
use syn::parse_macro_input;

use crate::{attrs::ContainerAttrs, config::MacroConfig, context::MacroContext};

mod attrs;
pub(crate) mod config;
pub(crate) mod context;
mod section;

/// Derives `Section` and `Field` for a struct with named fields.
///
/// Field attributes, all under `#[sectcfg(...)]`:
///
/// - `tag = "ident,int=dh"`: raw field tag
/// - `rename = "ident"`: name the field is matched by
/// - `int = "dho"`: integer bases the field accepts
/// - `extra_values`: catch-all container for undeclared variables
/// - `skip`: the field is not settable
///
/// The container attribute `crate = path` overrides the path of the runtime
/// crate (`::sectcfg` by default).
#[proc_macro_derive(Section, attributes(sectcfg))]
pub fn section_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match create_context(input) {
        Ok(context) => section::derive(context).into(),
        Err(error) => error.write_errors().into(),
    }
}

fn create_context(input: syn::DeriveInput) -> darling::Result<MacroContext> {
    let attrs = ContainerAttrs::from_derive_input(&input)?;
    Ok(MacroContext::new(MacroConfig::from_attrs(attrs), input))
}
