use crate::types::IntMode;

/// Parsed field tag.
///
/// The raw form is comma separated: the first segment overrides the name the
/// field is matched by, later `int=<letters>` segments restrict the integer
/// bases the field accepts. Segments that match neither rule are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Explicit identifier. Empty means "match by folded field name".
    pub ident: String,
    /// Raw letters of the last `int=` segment, if any.
    pub int_mode: Option<String>,
}

impl Tag {
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(',');
        let ident = segments.next().unwrap_or_default().to_string();
        let mut int_mode = None;
        for segment in segments {
            if let Some(letters) = segment.strip_prefix("int=") {
                int_mode = Some(letters.to_string());
            }
        }
        Tag { ident, int_mode }
    }

    /// The explicit identifier, if the tag declares one.
    pub fn ident(&self) -> Option<&str> {
        (!self.ident.is_empty()).then_some(self.ident.as_str())
    }

    /// Bases requested by the tag. An empty mode means "use the type default".
    pub fn int_mode(&self) -> IntMode {
        self.int_mode
            .as_deref()
            .map(IntMode::from_letters)
            .unwrap_or_default()
    }
}
