
mod field_shape;

use darling::FromField;
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens as _, quote};
use syn::ext::IdentExt as _;
use syn::spanned::Spanned;
use syn::{Data, Fields, Ident, Type};

use crate::attrs::{FieldAttrs, extract_sectcfg_attr_spans};
use crate::context::MacroContext;
use field_shape::FieldShape;

pub fn derive(context: MacroContext) -> TokenStream {
    derive_inner(&context).unwrap_or_else(syn::Error::into_compile_error)
}

/// One settable field, in declaration order.
#[derive(Debug)]
pub struct FieldPlan {
    pub ident: Ident,
    pub name: String,
    pub tag: String,
    pub ty: Type,
    pub kind: PlanKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    Shape(FieldShape),
    ExtraValues,
}

fn derive_inner(context: &MacroContext) -> syn::Result<TokenStream> {
    let input = &context.input;
    if let Some(param) = input.generics.params.first() {
        return Err(syn::Error::new(
            param.span(),
            "#[derive(Section)] does not support generic structs",
        ));
    }
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "#[derive(Section)] requires named fields",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "#[derive(Section)] requires named fields",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "#[derive(Section)] only supports structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "#[derive(Section)] only supports structs",
            ));
        }
    };
    let plans = plan_fields(fields)?;
    Ok(generate(context, &plans))
}

pub fn plan_fields<'a>(fields: impl IntoIterator<Item = &'a syn::Field>) -> syn::Result<Vec<FieldPlan>> {
    let mut plans = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::from_field(field)
            .map_err(|error| syn::Error::new(field.span(), error.to_string()))?;
        check_conflicts(field, &attrs)?;
        if attrs.skip {
            continue;
        }
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
        let kind = if attrs.is_extra_values() {
            PlanKind::ExtraValues
        } else {
            PlanKind::Shape(field_shape::classify(&field.ty))
        };
        check_value_type(&ident, &field.ty, kind)?;
        plans.push(FieldPlan {
            name: ident.unraw().to_string(),
            ident,
            tag: attrs.tag(),
            ty: field.ty.clone(),
            kind,
        });
    }
    Ok(plans)
}

fn check_conflicts(field: &syn::Field, attrs: &FieldAttrs) -> syn::Result<()> {
    let spans = extract_sectcfg_attr_spans(&field.attrs);
    let span_of = |key: &str| -> Span { spans.get(key).copied().unwrap_or_else(|| field.span()) };
    let naming = [
        ("tag", attrs.tag.is_some()),
        ("rename", attrs.rename.is_some()),
        ("int", attrs.int.is_some()),
    ];

    if attrs.skip {
        let others = naming
            .iter()
            .copied()
            .chain([("extra_values", attrs.extra_values)]);
        for (key, present) in others {
            if present {
                return Err(syn::Error::new(
                    span_of(key),
                    format!("cannot use #[sectcfg({key})] on a skipped field"),
                ));
            }
        }
    }
    if attrs.extra_values {
        for (key, present) in naming {
            if present {
                return Err(syn::Error::new(
                    span_of(key),
                    format!("cannot use #[sectcfg({key})] with #[sectcfg(extra_values)]"),
                ));
            }
        }
    }
    if attrs.tag.is_some() {
        for &(key, present) in &naming[1..] {
            if present {
                return Err(syn::Error::new(
                    span_of(key),
                    format!("cannot use #[sectcfg({key})] with #[sectcfg(tag)]; write it into the tag"),
                ));
            }
        }
    }
    Ok(())
}

/// Rejects map and catch-all types that can be told wrong from how they are
/// written. Anything else is left to the trait bounds of the runtime crate.
fn check_value_type(ident: &Ident, ty: &Type, kind: PlanKind) -> syn::Result<()> {
    let map = field_shape::map_arguments(ty);
    match kind {
        PlanKind::ExtraValues => {
            let valid = match map {
                Some((key, value)) => {
                    field_shape::is_string(key)
                        && (field_shape::is_string(value)
                            || field_shape::single_argument(value, "Vec").is_some_and(field_shape::is_string))
                }
                None => field_shape::classify(ty) == FieldShape::Plain,
            };
            if !valid {
                return Err(syn::Error::new(
                    ident.span(),
                    format!(
                        "#[sectcfg(extra_values)] field `{}` must map `String` to `String` or `Vec<String>`",
                        ident.unraw()
                    ),
                ));
            }
        }
        PlanKind::Shape(FieldShape::Plain) => {
            if let Some((key, value)) = map
                && !(field_shape::is_string(key) && (field_shape::is_string(value) || field_shape::is_boxed(value)))
            {
                return Err(syn::Error::new(
                    ident.span(),
                    format!(
                        "map field `{}` must map `String` to `String` or `Box<impl Section>`",
                        ident.unraw()
                    ),
                ));
            }
        }
        PlanKind::Shape(_) => {}
    }
    Ok(())
}

fn generate(context: &MacroContext, plans: &[FieldPlan]) -> TokenStream {
    let ident = context.ident();
    let type_name = ident.to_string();
    let section = context.Section();
    let schema = context.Schema();
    let field_desc = context.FieldDesc();
    let field_trait = context.Field();
    let field_kind = context.FieldKind();
    let field_mut = context.FieldMut();
    let no_nested_schema = context.no_nested_schema();

    let descriptors = plans.iter().map(|plan| {
        let FieldPlan { name, tag, ty, .. } = plan;
        let written = ty.to_token_stream().to_string().replace(' ', "");
        let (kind, nested) = match plan.kind {
            PlanKind::Shape(FieldShape::Plain) => (
                quote! { <#ty as #field_trait>::KIND },
                quote! { <#ty as #field_trait>::nested_schema },
            ),
            PlanKind::Shape(FieldShape::Optional) => {
                (quote! { #field_kind::Optional }, quote! { #no_nested_schema })
            }
            PlanKind::Shape(FieldShape::Multi) => {
                (quote! { #field_kind::Multi }, quote! { #no_nested_schema })
            }
            PlanKind::ExtraValues => (
                quote! { #field_kind::ExtraValues },
                quote! { #no_nested_schema },
            ),
        };
        quote! {
            #field_desc {
                name: #name,
                tag: #tag,
                type_name: #written,
                kind: #kind,
                nested: #nested,
            }
        }
    });

    let arms = plans.iter().enumerate().map(|(index, plan)| {
        let field = &plan.ident;
        let handle = match plan.kind {
            PlanKind::Shape(FieldShape::Plain) => {
                quote! { #field_trait::field_mut(&mut self.#field) }
            }
            PlanKind::Shape(FieldShape::Optional) => quote! { #field_mut::Optional(&mut self.#field) },
            PlanKind::Shape(FieldShape::Multi) => quote! { #field_mut::Multi(&mut self.#field) },
            PlanKind::ExtraValues => quote! { #field_mut::ExtraValues(&mut self.#field) },
        };
        quote! { #index => ::core::option::Option::Some(#handle), }
    });

    quote! {
        impl #section for #ident {
            fn describe() -> &'static #schema {
                static SCHEMA: #schema = #schema {
                    type_name: #type_name,
                    fields: &[#(#descriptors),*],
                };
                &SCHEMA
            }

            fn schema(&self) -> &'static #schema {
                <Self as #section>::describe()
            }

            fn field_at(&mut self, index: usize) -> ::core::option::Option<#field_mut<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn ::core::any::Any> {
                ::std::boxed::Box::new(::core::clone::Clone::clone(self))
            }
        }

        impl #field_trait for #ident {
            const KIND: #field_kind = #field_kind::Section;

            fn nested_schema() -> ::core::option::Option<&'static #schema> {
                ::core::option::Option::Some(<Self as #section>::describe())
            }

            fn field_mut(&mut self) -> #field_mut<'_> {
                #field_mut::Section(self)
            }
        }
    }
}
