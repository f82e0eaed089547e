//! Destinations and the value-parsing chain.
//!
//! A [`Destination`] is a field (or a freshly allocated sequence element)
//! whose static type is unknown to the engine. Each destination exposes the
//! capabilities it supports, and [`convert`] tries the converters in a fixed
//! order until one of them claims the destination:
//!
//! 1. exact-type converters registered by [`TypeId`] (arbitrary-precision integers),
//! 2. the [`FromText`] capability,
//! 3. the structural [`Kind`] (string, bool, integers),
//! 4. a whole-input [`Scan`] through [`FromStr`].
//!
//! A converter that does not handle the destination answers
//! [`Outcome::Unsupported`] and the next one is tried; a converter that
//! handles it but fails stops the chain.

use core::any::{Any, TypeId};
use core::fmt::Display;
use core::str::FromStr;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use num_bigint::BigInt;
use num_traits::Num as _;

use crate::tag::Tag;
use crate::types::{self, IntLiteral, IntMode};

/// Boxed error returned by [`FromText`] implementations.
pub type BoxError = Box<dyn core::error::Error + Send + Sync>;

/// Conversion failure for a single value.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// No converter handles the destination type.
    #[error("unsupported type {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// The entry had no value and the destination has no blank convention.
    #[error("blank value not supported for type {type_name}")]
    BlankUnsupported { type_name: &'static str },

    #[error("failed to parse {0:?} as bool")]
    InvalidBool(String),

    #[error("failed to parse {text:?} as an integer ({mode})")]
    InvalidInt { text: String, mode: IntMode },

    /// Hex and octal are both allowed but the literal carries no prefix.
    #[error("ambiguous integer value {0:?}; must include '0' prefix")]
    AmbiguousInt(String),

    #[error("value {text:?} out of {type_name} range")]
    IntOutOfRange {
        text: String,
        type_name: &'static str,
    },

    /// A [`FromText`] implementation rejected the value.
    #[error("{0}")]
    Text(String),

    /// [`FromStr`] rejected the value.
    #[error("failed to parse {text:?} as {type_name}: {reason}")]
    Scan {
        text: String,
        type_name: &'static str,
        reason: String,
    },
}

/// Textual self-deserialization for user-defined value types.
///
/// Register an implementing type with [`text_value!`](crate::text_value) to
/// make it usable as a field.
pub trait FromText {
    fn from_text(&mut self, text: &str) -> Result<(), BoxError>;
}

/// Whole-input formatted scan.
pub trait Scan {
    fn scan(&mut self, text: &str) -> Result<(), ValueError>;
}

impl<T> Scan for T
where
    T: FromStr,
    T::Err: Display,
{
    fn scan(&mut self, text: &str) -> Result<(), ValueError> {
        *self = text.trim().parse().map_err(|e: T::Err| ValueError::Scan {
            text: text.to_string(),
            type_name: core::any::type_name::<T>(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Integer destination of any width.
pub trait Integer {
    /// Bases accepted when the field tag does not specify any.
    fn default_mode(&self) -> IntMode;

    /// `mode` is the set of bases the literal was parsed under, for errors.
    fn assign_literal(&mut self, literal: &IntLiteral<'_>, mode: IntMode) -> Result<(), ValueError>;
}

/// Structural kind of a destination.
pub enum Kind<'a> {
    String(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut dyn Integer),
}

/// A location a raw value can be converted into.
///
/// Every capability defaults to "not supported"; implementations override
/// the ones that apply to them.
pub trait Destination: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    fn text(&mut self) -> Option<&mut dyn FromText> {
        None
    }

    fn kind(&mut self) -> Option<Kind<'_>> {
        None
    }

    fn scan(&mut self) -> Option<&mut dyn Scan> {
        None
    }
}

/// Result of a single converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Assigned,
    /// The converter does not handle this destination; try the next one.
    Unsupported,
    /// The converter handles this destination and the value is invalid.
    Failed(ValueError),
}

impl From<Result<(), ValueError>> for Outcome {
    fn from(result: Result<(), ValueError>) -> Self {
        match result {
            Ok(()) => Outcome::Assigned,
            Err(error) => Outcome::Failed(error),
        }
    }
}

/// Raw value of an entry together with the tag of the field it targets.
///
/// `text` is `None` for a blank entry (a name without `=`), which is distinct
/// from an explicit empty string.
#[derive(Debug, Clone, Copy)]
pub struct RawValue<'a> {
    pub text: Option<&'a str>,
    pub tag: &'a Tag,
}

impl RawValue<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.is_none()
    }

    pub fn assign_to(&self, dest: &mut dyn Destination) -> Result<(), ValueError> {
        convert(dest, self.text, self.tag)
    }
}

type Converter = fn(&mut dyn Destination, Option<&str>, &Tag) -> Outcome;

const CONVERTERS: [Converter; 4] = [convert_exact, convert_text, convert_kind, convert_scan];

/// Runs the value-parsing chain against `dest`.
pub fn convert(dest: &mut dyn Destination, text: Option<&str>, tag: &Tag) -> Result<(), ValueError> {
    for converter in CONVERTERS {
        match converter(dest, text, tag) {
            Outcome::Assigned => return Ok(()),
            Outcome::Unsupported => continue,
            Outcome::Failed(error) => return Err(error),
        }
    }
    Err(ValueError::UnsupportedType {
        type_name: dest.type_name(),
    })
}

type ExactSetter = fn(&mut dyn Any, &'static str, Option<&str>, &Tag) -> Outcome;

fn exact_setters() -> [(TypeId, ExactSetter); 1] {
    [(TypeId::of::<BigInt>(), set_big_int)]
}

fn set_big_int(dest: &mut dyn Any, type_name: &'static str, text: Option<&str>, tag: &Tag) -> Outcome {
    match dest.downcast_mut::<BigInt>() {
        Some(value) => set_int(value, type_name, text, tag),
        None => Outcome::Unsupported,
    }
}

fn convert_exact(dest: &mut dyn Destination, text: Option<&str>, tag: &Tag) -> Outcome {
    let type_name = dest.type_name();
    let any = dest.as_any_mut();
    let type_id = (*any).type_id();
    match exact_setters().into_iter().find(|(id, _)| *id == type_id) {
        Some((_, setter)) => setter(any, type_name, text, tag),
        None => Outcome::Unsupported,
    }
}

fn convert_text(dest: &mut dyn Destination, text: Option<&str>, _tag: &Tag) -> Outcome {
    let type_name = dest.type_name();
    let Some(target) = dest.text() else {
        return Outcome::Unsupported;
    };
    let Some(text) = text else {
        return Outcome::Failed(ValueError::BlankUnsupported { type_name });
    };
    target
        .from_text(text)
        .map_err(|e| ValueError::Text(e.to_string()))
        .into()
}

fn convert_kind(dest: &mut dyn Destination, text: Option<&str>, tag: &Tag) -> Outcome {
    let type_name = dest.type_name();
    match dest.kind() {
        None => Outcome::Unsupported,
        Some(Kind::String(target)) => match text {
            None => Outcome::Failed(ValueError::BlankUnsupported { type_name }),
            Some(text) => {
                *target = text.to_string();
                Outcome::Assigned
            }
        },
        // a bare name acts as a flag
        Some(Kind::Bool(target)) => match text {
            None => {
                *target = true;
                Outcome::Assigned
            }
            Some(text) => types::parse_bool(text).map(|b| *target = b).into(),
        },
        Some(Kind::Int(target)) => set_int(target, type_name, text, tag),
    }
}

fn set_int(target: &mut dyn Integer, type_name: &'static str, text: Option<&str>, tag: &Tag) -> Outcome {
    let Some(text) = text else {
        return Outcome::Failed(ValueError::BlankUnsupported { type_name });
    };
    let mut mode = tag.int_mode();
    if mode.is_empty() {
        mode = target.default_mode();
    }
    types::parse_int(text, mode)
        .and_then(|literal| target.assign_literal(&literal, mode))
        .into()
}

fn convert_scan(dest: &mut dyn Destination, text: Option<&str>, _tag: &Tag) -> Outcome {
    let type_name = dest.type_name();
    let Some(target) = dest.scan() else {
        return Outcome::Unsupported;
    };
    match text {
        None => Outcome::Failed(ValueError::BlankUnsupported { type_name }),
        Some(text) => target.scan(text).into(),
    }
}

impl Destination for String {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&mut self) -> Option<Kind<'_>> {
        Some(Kind::String(self))
    }
}

impl Destination for bool {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&mut self) -> Option<Kind<'_>> {
        Some(Kind::Bool(self))
    }
}

macro_rules! integer_destinations {
    ($($ty:ty => $mode:expr),* $(,)?) => {
        $(
            impl Integer for $ty {
                fn default_mode(&self) -> IntMode {
                    $mode
                }

                fn assign_literal(&mut self, literal: &IntLiteral<'_>, mode: IntMode) -> Result<(), ValueError> {
                    use core::num::IntErrorKind;
                    *self = <$ty>::from_str_radix(&literal.signed_digits(), literal.radix)
                        .map_err(|e| match e.kind() {
                            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                ValueError::IntOutOfRange {
                                    text: literal.source.to_string(),
                                    type_name: stringify!($ty),
                                }
                            }
                            _ => ValueError::InvalidInt {
                                text: literal.source.to_string(),
                                mode,
                            },
                        })?;
                    Ok(())
                }
            }

            impl Destination for $ty {
                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn kind(&mut self) -> Option<Kind<'_>> {
                    Some(Kind::Int(self))
                }
            }
        )*
    };
}

integer_destinations! {
    i8 => IntMode::FIXED_WIDTH_DEFAULT,
    i16 => IntMode::FIXED_WIDTH_DEFAULT,
    i32 => IntMode::FIXED_WIDTH_DEFAULT,
    i64 => IntMode::FIXED_WIDTH_DEFAULT,
    i128 => IntMode::FIXED_WIDTH_DEFAULT,
    u8 => IntMode::FIXED_WIDTH_DEFAULT,
    u16 => IntMode::FIXED_WIDTH_DEFAULT,
    u32 => IntMode::FIXED_WIDTH_DEFAULT,
    u64 => IntMode::FIXED_WIDTH_DEFAULT,
    u128 => IntMode::FIXED_WIDTH_DEFAULT,
    isize => IntMode::OTHER_DEFAULT,
    usize => IntMode::OTHER_DEFAULT,
}

impl Integer for BigInt {
    fn default_mode(&self) -> IntMode {
        IntMode::OTHER_DEFAULT
    }

    fn assign_literal(&mut self, literal: &IntLiteral<'_>, mode: IntMode) -> Result<(), ValueError> {
        *self = BigInt::from_str_radix(&literal.signed_digits(), literal.radix).map_err(|_| {
            ValueError::InvalidInt {
                text: literal.source.to_string(),
                mode,
            }
        })?;
        Ok(())
    }
}

// Handled by the exact-type converter only.
impl Destination for BigInt {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

macro_rules! scan_destinations {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Destination for $ty {
                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn scan(&mut self) -> Option<&mut dyn Scan> {
                    Some(self)
                }
            }
        )*
    };
}

scan_destinations!(f32, f64, char, PathBuf, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

/// Wrapper turning any [`FromStr`] type into a destination converted by the
/// scan converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scanned<T>(pub T);

impl<T> Scanned<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::ops::Deref for Scanned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Destination for Scanned<T>
where
    T: FromStr + 'static,
    T::Err: Display,
{
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn scan(&mut self) -> Option<&mut dyn Scan> {
        Some(&mut self.0)
    }
}

/// Registers types implementing [`FromText`] as scalar fields.
///
/// ```ignore
/// struct Level(u8);
///
/// impl sectcfg_core::FromText for Level {
///     fn from_text(&mut self, text: &str) -> Result<(), sectcfg_core::value::BoxError> {
///         self.0 = match text { "low" => 1, "high" => 9, _ => return Err("unknown level".into()) };
///         Ok(())
///     }
/// }
///
/// sectcfg_core::text_value!(Level);
/// ```
#[macro_export]
macro_rules! text_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::value::Destination for $ty {
                fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                    self
                }

                fn text(&mut self) -> ::core::option::Option<&mut dyn $crate::value::FromText> {
                    ::core::option::Option::Some(self)
                }
            }

            impl $crate::field::Field for $ty {
                const KIND: $crate::field::FieldKind = $crate::field::FieldKind::Value;

                fn field_mut(&mut self) -> $crate::field::FieldMut<'_> {
                    $crate::field::FieldMut::Value(self)
                }
            }
        )*
    };
}
