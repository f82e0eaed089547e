use crate::field::FieldKind;
use crate::fold::{self, fold_name};
use crate::tag::Tag;

/// Schema-description table of one struct, generated once per type.
#[derive(Debug)]
pub struct Schema {
    pub type_name: &'static str,
    /// Settable fields in declaration order.
    pub fields: &'static [FieldDesc],
}

/// One settable field of a [`Schema`].
#[derive(Debug, Clone, Copy)]
pub struct FieldDesc {
    /// Declared Rust field name, without any raw-identifier prefix.
    pub name: &'static str,
    /// Raw tag string, `ident[,int=<letters>]` or `extra_values`.
    pub tag: &'static str,
    /// Field type as written, for messages.
    pub type_name: &'static str,
    pub kind: FieldKind,
    /// Schema of the nested struct, for section-shaped fields.
    pub nested: fn() -> Option<&'static Schema>,
}

impl FieldDesc {
    pub fn is_extra_values(&self) -> bool {
        self.kind == FieldKind::ExtraValues
    }

    pub fn nested_schema(&self) -> Option<&'static Schema> {
        (self.nested)()
    }

    /// Name this field is addressed by: the tag identifier if any, else the
    /// declared name.
    pub fn canonical_name(&self) -> String {
        let tag = Tag::parse(self.tag);
        tag.ident().unwrap_or(self.name).to_string()
    }
}

/// `nested` value of fields that hold no struct.
pub fn no_nested_schema() -> Option<&'static Schema> {
    None
}

/// Schema-authoring error, detected before any entry is applied.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("fields `{first}` and `{second}` of `{type_name}` match the same names")]
    AmbiguousField {
        type_name: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("field `{field}` of `{type_name}` must be a section struct or a map of subsections")]
    NotASection {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("`{type_name}` declares more than one extra_values field: `{first}` and `{second}`")]
    DuplicateExtraValues {
        type_name: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("field `{field}` of `{type_name}` must have the subsection type of `{section}` to serve as its default")]
    DefaultTypeMismatch {
        type_name: &'static str,
        field: &'static str,
        section: &'static str,
    },
}

impl Schema {
    pub fn field(&self, index: usize) -> Option<&FieldDesc> {
        self.fields.get(index)
    }

    /// Index of the catch-all container, if the struct declares one.
    pub fn extra_values_index(&self) -> Option<usize> {
        self.fields.iter().position(FieldDesc::is_extra_values)
    }

    /// Validates `self` as the root of a configuration.
    ///
    /// Checks the root and every section struct reachable from it: field
    /// names must not fold onto each other, the root may only hold sections,
    /// at most one catch-all container per struct, and `default-<section>`
    /// fields must hold the subsection type of their section.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.validate_fields()?;
        for field in self.fields {
            if !field.kind.is_section() {
                return Err(SchemaError::NotASection {
                    type_name: self.type_name,
                    field: field.name,
                });
            }
            if let Some(nested) = field.nested_schema() {
                nested.validate_fields()?;
            }
            if field.kind == FieldKind::Subsections {
                self.validate_default_for(field)?;
            }
        }
        Ok(())
    }

    fn validate_fields(&self) -> Result<(), SchemaError> {
        let mut extra: Option<&FieldDesc> = None;
        for (index, field) in self.fields.iter().enumerate() {
            if field.is_extra_values() {
                if let Some(first) = extra {
                    return Err(SchemaError::DuplicateExtraValues {
                        type_name: self.type_name,
                        first: first.name,
                        second: field.name,
                    });
                }
                extra = Some(field);
                continue;
            }
            for other in &self.fields[index + 1..] {
                if !other.is_extra_values() && names_overlap(field, other) {
                    return Err(SchemaError::AmbiguousField {
                        type_name: self.type_name,
                        first: field.name,
                        second: other.name,
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_default_for(&self, section: &FieldDesc) -> Result<(), SchemaError> {
        let default_name = format!("default-{}", section.canonical_name());
        let Some((index, _)) = fold::find_field(self, &default_name) else {
            return Ok(());
        };
        let default = &self.fields[index];
        let same_type = match (default.nested_schema(), section.nested_schema()) {
            (Some(a), Some(b)) => default.kind == FieldKind::Section && core::ptr::eq(a, b),
            _ => false,
        };
        if same_type {
            Ok(())
        } else {
            Err(SchemaError::DefaultTypeMismatch {
                type_name: self.type_name,
                field: default.name,
                section: section.name,
            })
        }
    }
}

/// Key a field is matched by, lowercased: the tag identifier folded like a
/// configuration name, or the declared name.
fn match_key(field: &FieldDesc) -> String {
    let tag = Tag::parse(field.tag);
    match tag.ident() {
        Some(ident) => fold_name(ident).to_lowercase(),
        None => field.name.to_lowercase(),
    }
}

fn names_overlap(a: &FieldDesc, b: &FieldDesc) -> bool {
    let (tag_a, tag_b) = (Tag::parse(a.tag), Tag::parse(b.tag));
    match (tag_a.ident(), tag_b.ident()) {
        (Some(x), Some(y)) => x.to_lowercase() == y.to_lowercase(),
        _ => match_key(a) == match_key(b),
    }
}
