use crate::schema::{FieldDesc, Schema};
use crate::tag::Tag;

/// Finds the field of `schema` that `name` refers to.
///
/// A field carrying an explicit tag identifier matches when that identifier
/// equals `name` ignoring case. Other fields match by their declared name,
/// compared ignoring case against `name` with hyphens turned into
/// underscores. The catch-all container never matches.
pub fn find_field(schema: &Schema, name: &str) -> Option<(usize, Tag)> {
    let folded = fold_name(name);
    schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.is_extra_values())
        .find_map(|(index, field)| {
            let tag = Tag::parse(field.tag);
            let matched = match tag.ident() {
                Some(ident) => ident.eq_ignore_ascii_case(name) || unicode_eq(ident, name),
                None => matches_declared(field, &folded),
            };
            matched.then_some((index, tag))
        })
}

/// Normalizes a configuration name into the form of a declared field name.
///
/// Names starting with a letter that has no case get an `X` prefix so they
/// line up with identifiers that cannot start with such a letter.
pub fn fold_name(name: &str) -> String {
    let mut folded = String::with_capacity(name.len() + 1);
    if name
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() && !c.is_lowercase() && !c.is_uppercase())
    {
        folded.push('X');
    }
    folded.push_str(&name.replace('-', "_"));
    folded
}

fn matches_declared(field: &FieldDesc, folded: &str) -> bool {
    field.name.eq_ignore_ascii_case(folded) || unicode_eq(field.name, folded)
}

fn unicode_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
