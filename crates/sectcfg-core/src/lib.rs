//! Assigns sectioned configuration entries onto statically-declared schemas.
//!
//! A tokenizer (not part of this crate) turns configuration text into
//! `(section, subsection, name, value)` entries. Each entry is handed to the
//! [`assign`] engine, which resolves the section and variable against the
//! schema table of the root type, converts the raw text into the field's
//! type and records every data problem as a [`Diagnostic`] instead of
//! stopping at the first one.
//!
//! Schema types normally implement [`Section`] through the derive macro
//! re-exported by the `sectcfg` facade crate.

/// Field tag syntax (`ident[,int=<letters>]`).
pub mod tag;

/// Case and punctuation insensitive field lookup.
pub mod fold;

/// Primitive boolean and integer parsers.
pub mod types;

/// Destinations and the ordered value-parsing chain.
pub mod value;

/// Field shapes and the traits behind them.
pub mod field;

/// Schema-description tables and construction-time validation.
pub mod schema;

/// The trait implemented by every schema struct.
pub mod section;

/// Location-tagged, accumulated data errors.
pub mod diagnostic;

/// The assignment engine.
pub mod assign;

pub use assign::{Applied, Assigner, Entry, Pass, assign_all, set};
pub use diagnostic::{Diagnostic, Diagnostics, Location};
pub use field::{Field, FieldKind, FieldMut};
pub use schema::{FieldDesc, Schema, SchemaError};
pub use section::Section;
pub use tag::Tag;
pub use types::IntMode;
pub use value::{Destination, FromText, RawValue, Scanned, ValueError};

pub use num_bigint::BigInt;
