use syn::{AngleBracketedGenericArguments, GenericArgument, PathArguments, PathSegment, Type};

/// Shape of a field as far as it can be told from the written type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Anything the `Field` trait of the runtime crate classifies.
    Plain,
    /// `Option<T>` where `T` is not a `Vec`.
    Optional,
    /// `Vec<T>` or `Option<Vec<T>>`.
    Multi,
}

pub fn classify(ty: &Type) -> FieldShape {
    if let Some(inner) = single_argument(ty, "Option") {
        if single_argument(inner, "Vec").is_some() {
            return FieldShape::Multi;
        }
        return FieldShape::Optional;
    }
    if single_argument(ty, "Vec").is_some() {
        return FieldShape::Multi;
    }
    FieldShape::Plain
}

const MAP_TYPES: [&str; 3] = ["HashMap", "BTreeMap", "IndexMap"];

/// `(K, V)` of a written `HashMap<K, V>`, `BTreeMap<K, V>` or `IndexMap<K, V>`.
pub fn map_arguments(ty: &Type) -> Option<(&Type, &Type)> {
    let segment = last_segment(ty)?;
    if !MAP_TYPES.iter().any(|name| segment.ident == *name) {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    let mut types = type_arguments(arguments);
    match (types.next(), types.next()) {
        (Some(key), Some(value)) => Some((key, value)),
        _ => None,
    }
}

pub fn is_string(ty: &Type) -> bool {
    last_segment(ty).is_some_and(|segment| segment.ident == "String" && segment.arguments.is_none())
}

pub fn is_boxed(ty: &Type) -> bool {
    single_argument(ty, "Box").is_some()
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(path) = strip(ty) else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    path.path.segments.last()
}

fn type_arguments(arguments: &AngleBracketedGenericArguments) -> impl Iterator<Item = &Type> {
    arguments.args.iter().filter_map(|argument| match argument {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// `T` of a path type whose last segment is `name<T>`.
pub fn single_argument<'a>(ty: &'a Type, name: &str) -> Option<&'a Type> {
    let segment = last_segment(ty)?;
    if segment.ident != name {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    let mut types = type_arguments(arguments);
    match (types.next(), types.next()) {
        (Some(ty), None) => Some(ty),
        _ => None,
    }
}

fn strip(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => strip(&group.elem),
        Type::Paren(paren) => strip(&paren.elem),
        ty => ty,
    }
}
