//! Typed schemas for git-config style configuration.
//!
//! ```ignore
//! use std::collections::HashMap;
//!
//! use sectcfg::{Entry, Section};
//!
//! #[derive(Debug, Clone, Default, Section)]
//! struct Core {
//!     editor: String,
//!     #[sectcfg(rename = "bare")]
//!     bare_repo: bool,
//! }
//!
//! #[derive(Debug, Clone, Default, Section)]
//! struct Remote {
//!     url: String,
//!     fetch: Vec<String>,
//! }
//!
//! #[derive(Debug, Clone, Default, Section)]
//! struct Config {
//!     core: Core,
//!     remote: HashMap<String, Box<Remote>>,
//! }
//!
//! let mut config = Config::default();
//! let diagnostics = sectcfg::assign_all(
//!     &mut config,
//!     [
//!         Entry::value("core", None, "editor", "vim"),
//!         Entry::blank("core", None, "bare"),
//!         Entry::value("remote", Some("origin"), "url", "https://example.com/repo.git"),
//!     ],
//! )?;
//! assert!(diagnostics.is_empty());
//! ```

pub use sectcfg_core::{assign, diagnostic, field, fold, schema, section, tag, text_value, types, value};

pub use sectcfg_core::{
    Applied, Assigner, BigInt, Destination, Diagnostic, Diagnostics, Entry, Field, FieldDesc, FieldKind,
    FieldMut, FromText, IntMode, Location, Pass, RawValue, Scanned, Schema, SchemaError, Section, Tag,
    ValueError, assign_all, set,
};

pub use sectcfg_macros::Section;
