use core::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::schema::Schema;
use crate::section::Section;
use crate::value::{Destination, RawValue, Scanned, ValueError};

/// Shape of a schema field, recorded in its [`FieldDesc`](crate::schema::FieldDesc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single converted value.
    Value,
    /// `Option<T>`: allocated on first successful assignment.
    Optional,
    /// `Vec<T>` or `Option<Vec<T>>`: one element per entry.
    Multi,
    /// A nested struct: a single section.
    Section,
    /// `String -> Box<S>` map: one struct per subsection.
    Subsections,
    /// `String -> String` map: fully dynamic subsections.
    FlatSubsections,
    /// Catch-all container for unrecognized variables.
    ExtraValues,
}

impl FieldKind {
    /// Whether a field of this kind can stand for a top-level section.
    pub fn is_section(self) -> bool {
        matches!(
            self,
            FieldKind::Section | FieldKind::Subsections | FieldKind::FlatSubsections
        )
    }

    /// Whether this kind is handled by the subsection pass.
    pub fn is_subsection_map(self) -> bool {
        matches!(self, FieldKind::Subsections | FieldKind::FlatSubsections)
    }
}

/// Mutable handle to one field of a section.
pub enum FieldMut<'a> {
    Value(&'a mut dyn Destination),
    Optional(&'a mut dyn OptionalValue),
    Multi(&'a mut dyn MultiValue),
    Section(&'a mut dyn Section),
    Subsections(&'a mut dyn Subsections),
    FlatSubsections(&'a mut dyn FlatSubsections),
    ExtraValues(&'a mut dyn ExtraValues),
}

impl FieldMut<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldMut::Value(_) => FieldKind::Value,
            FieldMut::Optional(_) => FieldKind::Optional,
            FieldMut::Multi(_) => FieldKind::Multi,
            FieldMut::Section(_) => FieldKind::Section,
            FieldMut::Subsections(_) => FieldKind::Subsections,
            FieldMut::FlatSubsections(_) => FieldKind::FlatSubsections,
            FieldMut::ExtraValues(_) => FieldKind::ExtraValues,
        }
    }

    /// Assigns a raw value to a variable-shaped field.
    ///
    /// Multi-valued fields are cleared by a blank value and appended to
    /// otherwise. Optional fields are only set once the conversion succeeds.
    pub fn assign(self, value: &RawValue<'_>, type_name: &'static str) -> Result<(), ValueError> {
        match self {
            FieldMut::Value(dest) => value.assign_to(dest),
            FieldMut::Optional(slot) => slot.assign_with(value),
            FieldMut::Multi(values) if value.is_blank() => {
                values.clear_values();
                Ok(())
            }
            FieldMut::Multi(values) => values.push_with(value),
            _ => Err(ValueError::UnsupportedType { type_name }),
        }
    }
}

/// Maps a field type to its shape.
///
/// Implemented for the scalar destinations of this crate, the subsection
/// maps, and every struct deriving `Section`. `Vec<T>`, `Option<Vec<T>>` and
/// `Option<T>` fields are recognized by the derive from the written type, so
/// a type alias or newtype around a `Vec` stays single-valued.
pub trait Field {
    const KIND: FieldKind;

    /// Schema of the struct this field holds, for sections and subsection maps.
    fn nested_schema() -> Option<&'static Schema> {
        None
    }

    fn field_mut(&mut self) -> FieldMut<'_>;
}

macro_rules! scalar_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Field for $ty {
                const KIND: FieldKind = FieldKind::Value;

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Value(self)
                }
            }
        )*
    };
}

scalar_fields! {
    String, bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    BigInt,
    f32, f64, char, PathBuf,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr,
}

impl<T> Field for Scanned<T>
where
    Scanned<T>: Destination,
{
    const KIND: FieldKind = FieldKind::Value;

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Value(self)
    }
}

/// `Option<T>` field, allocated on first use.
pub trait OptionalValue {
    fn assign_with(&mut self, value: &RawValue<'_>) -> Result<(), ValueError>;
}

impl<T: Destination + Default> OptionalValue for Option<T> {
    fn assign_with(&mut self, value: &RawValue<'_>) -> Result<(), ValueError> {
        match self {
            Some(current) => value.assign_to(current),
            None => {
                let mut fresh = T::default();
                value.assign_to(&mut fresh)?;
                *self = Some(fresh);
                Ok(())
            }
        }
    }
}

/// Append-only sequence field.
pub trait MultiValue {
    fn clear_values(&mut self);

    /// Converts a fresh element and appends it; nothing is appended on failure.
    fn push_with(&mut self, value: &RawValue<'_>) -> Result<(), ValueError>;
}

impl<T: Destination + Default> MultiValue for Vec<T> {
    fn clear_values(&mut self) {
        self.clear();
    }

    fn push_with(&mut self, value: &RawValue<'_>) -> Result<(), ValueError> {
        let mut element = T::default();
        value.assign_to(&mut element)?;
        self.push(element);
        Ok(())
    }
}

impl<T: Destination + Default> MultiValue for Option<Vec<T>> {
    fn clear_values(&mut self) {
        self.get_or_insert_with(Vec::new).clear();
    }

    fn push_with(&mut self, value: &RawValue<'_>) -> Result<(), ValueError> {
        self.get_or_insert_with(Vec::new).push_with(value)
    }
}

/// Map of subsection name to section struct.
pub trait Subsections {
    fn contains_subsection(&self, name: &str) -> bool;

    fn subsection_mut(&mut self, name: &str) -> Option<&mut dyn Section>;

    /// Inserts a new subsection, starting from `template` when it holds a
    /// value of the stored struct type and from `Default` otherwise.
    fn insert_subsection(&mut self, name: &str, template: Option<Box<dyn Any>>) -> &mut dyn Section;
}

/// Map of `"<subsection> <name>"` (or `"<name>"`) to raw value.
pub trait FlatSubsections {
    fn insert_flat(&mut self, key: String, value: String);
}

/// Catch-all container for variables the section does not declare.
pub trait ExtraValues {
    fn record(&mut self, name: &str, value: &str);
}

macro_rules! map_fields {
    ($($map:ident),* $(,)?) => {
        $(
            impl<S: Section + Default> Subsections for $map<String, Box<S>> {
                fn contains_subsection(&self, name: &str) -> bool {
                    self.contains_key(name)
                }

                fn subsection_mut(&mut self, name: &str) -> Option<&mut dyn Section> {
                    match $map::get_mut(self, name) {
                        Some(section) => Some(&mut **section as &mut dyn Section),
                        None => None,
                    }
                }

                fn insert_subsection(
                    &mut self,
                    name: &str,
                    template: Option<Box<dyn Any>>,
                ) -> &mut dyn Section {
                    let value: Box<S> = template
                        .and_then(|template| template.downcast::<S>().ok())
                        .unwrap_or_default();
                    &mut **self.entry(name.to_string()).or_insert(value)
                }
            }

            impl<S: Section + Default> Field for $map<String, Box<S>> {
                const KIND: FieldKind = FieldKind::Subsections;

                fn nested_schema() -> Option<&'static Schema> {
                    Some(S::describe())
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Subsections(self)
                }
            }

            impl FlatSubsections for $map<String, String> {
                fn insert_flat(&mut self, key: String, value: String) {
                    self.insert(key, value);
                }
            }

            impl Field for $map<String, String> {
                const KIND: FieldKind = FieldKind::FlatSubsections;

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::FlatSubsections(self)
                }
            }

            impl ExtraValues for $map<String, String> {
                fn record(&mut self, name: &str, value: &str) {
                    self.insert(name.to_string(), value.to_string());
                }
            }

            impl ExtraValues for $map<String, Vec<String>> {
                fn record(&mut self, name: &str, value: &str) {
                    self.entry(name.to_string())
                        .or_default()
                        .push(value.to_string());
                }
            }
        )*
    };
}

map_fields!(HashMap, BTreeMap, IndexMap);
