use proc_macro2::TokenStream;
use quote::quote;

use crate::attrs::ContainerAttrs;

pub struct MacroConfig {
    /// Path generated code uses to reach the runtime crate.
    pub runtime_crate: TokenStream,
}

impl MacroConfig {
    pub fn from_attrs(attrs: ContainerAttrs) -> Self {
        use quote::ToTokens;
        let runtime_crate = attrs
            .crate_path
            .map(|path| path.into_token_stream())
            .unwrap_or_else(|| quote! { ::sectcfg });
        Self { runtime_crate }
    }
}
