use darling::FromField;

#[derive(Debug, Default, FromField)]
#[darling(default, attributes(sectcfg))]
pub struct FieldAttrs {
    /// Raw tag, `ident[,int=<letters>]`. Exclusive with `rename` and `int`.
    pub tag: Option<String>,
    /// Name the field is matched by, compared ignoring case only.
    pub rename: Option<String>,
    /// Accepted integer bases: any of `d`, `h`, `o`.
    pub int: Option<String>,
    /// Catch-all container for variables the section does not declare.
    pub extra_values: bool,
    /// Not settable from configuration.
    pub skip: bool,
}

const EXTRA_VALUES_TAG: &str = "extra_values";

impl FieldAttrs {
    /// Set by `extra_values` or by the raw tag `extra_values`.
    pub fn is_extra_values(&self) -> bool {
        self.extra_values || self.tag.as_deref() == Some(EXTRA_VALUES_TAG)
    }

    /// Raw tag string of the field.
    pub fn tag(&self) -> String {
        if self.extra_values {
            return EXTRA_VALUES_TAG.to_string();
        }
        if let Some(tag) = &self.tag {
            return tag.clone();
        }
        let ident = self.rename.as_deref().unwrap_or_default();
        match &self.int {
            Some(int) => format!("{ident},int={int}"),
            None => ident.to_string(),
        }
    }
}
