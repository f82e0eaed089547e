use core::fmt;

use thisisplural::Plural;

use crate::value::ValueError;

/// Where in the configuration hierarchy a diagnostic applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub section: String,
    pub subsection: Option<String>,
    pub variable: Option<String>,
}

impl Location {
    pub fn section(section: &str) -> Self {
        Location {
            section: section.to_string(),
            subsection: None,
            variable: None,
        }
    }

    /// `subsection` of `None` or `Some("")` both mean "no subsection".
    pub fn subsection(section: &str, subsection: Option<&str>) -> Self {
        Location {
            subsection: subsection.filter(|s| !s.is_empty()).map(str::to_string),
            ..Location::section(section)
        }
    }

    pub fn variable(section: &str, subsection: Option<&str>, variable: &str) -> Self {
        Location {
            variable: Some(variable.to_string()),
            ..Location::subsection(section, subsection)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section {:?}", self.section)?;
        if let Some(subsection) = &self.subsection {
            write!(f, ", subsection {subsection:?}")?;
        }
        if let Some(variable) = &self.variable {
            write!(f, ", variable {variable:?}")?;
        }
        Ok(())
    }
}

/// A data problem found while applying entries.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A section, subsection or variable the schema does not declare.
    #[error("can't store data at {location}")]
    ExtraData { location: Location },

    #[error("{location}: {error}")]
    Value {
        location: Location,
        #[source]
        error: ValueError,
    },
}

impl Diagnostic {
    pub fn location(&self) -> &Location {
        match self {
            Diagnostic::ExtraData { location } | Diagnostic::Value { location, .. } => location,
        }
    }

    /// Unrecognized data is a warning; conversion failures are errors.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Diagnostic::Value { .. })
    }
}

/// Diagnostics in the order they were produced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, fatal = diagnostic.is_fatal(), "diagnostic");
        self.0.push(diagnostic);
    }

    pub fn extra_data(&mut self, location: Location) {
        self.push(Diagnostic::ExtraData { location });
    }

    pub fn value_error(&mut self, location: Location, error: ValueError) {
        self.push(Diagnostic::Value { location, error });
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_fatal)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.is_fatal())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| !d.is_fatal())
    }

    /// `Ok` with the remaining warnings, or `Err(self)` if any error was
    /// recorded.
    pub fn into_result(self) -> Result<Diagnostics, Diagnostics> {
        if self.has_errors() { Err(self) } else { Ok(self) }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, diagnostic) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Diagnostics {}
