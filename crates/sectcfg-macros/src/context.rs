use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident};

use crate::config::MacroConfig;

pub struct MacroContext {
    pub config: MacroConfig,
    pub input: DeriveInput,
}

impl MacroContext {
    pub fn new(config: MacroConfig, input: DeriveInput) -> Self {
        Self { config, input }
    }

    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    #[allow(non_snake_case)]
    pub fn Section(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::section::Section)
    }

    #[allow(non_snake_case)]
    pub fn Schema(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::schema::Schema)
    }

    #[allow(non_snake_case)]
    pub fn FieldDesc(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::schema::FieldDesc)
    }

    pub fn no_nested_schema(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::schema::no_nested_schema)
    }

    #[allow(non_snake_case)]
    pub fn Field(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::field::Field)
    }

    #[allow(non_snake_case)]
    pub fn FieldKind(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::field::FieldKind)
    }

    #[allow(non_snake_case)]
    pub fn FieldMut(&self) -> TokenStream {
        let runtime_crate = &self.config.runtime_crate;
        quote!(#runtime_crate::field::FieldMut)
    }
}
