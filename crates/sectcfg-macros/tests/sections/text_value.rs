use sectcfg::value::BoxError;
use sectcfg::{Diagnostic, Entry, FromText, Section, assign_all};

#[derive(Debug, Clone, Default, PartialEq)]
enum Whitespace {
    #[default]
    Keep,
    Trailing,
    Indent,
}

impl FromText for Whitespace {
    fn from_text(&mut self, text: &str) -> Result<(), BoxError> {
        *self = match text {
            "keep" => Whitespace::Keep,
            "trailing-space" => Whitespace::Trailing,
            "indent-with-non-tab" => Whitespace::Indent,
            _ => return Err(format!("unknown whitespace rule {text:?}").into()),
        };
        Ok(())
    }
}

sectcfg::text_value!(Whitespace);

#[derive(Debug, Clone, Default, Section)]
struct Core {
    whitespace: Whitespace,
    rules: Vec<Whitespace>,
}

#[derive(Debug, Clone, Default, Section)]
struct Config {
    core: Core,
}

#[test]
fn test_from_text_values() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::value("core", None, "whitespace", "trailing-space"),
            Entry::value("core", None, "rules", "indent-with-non-tab"),
            Entry::value("core", None, "rules", "bogus"),
            Entry::blank("core", None, "whitespace"),
        ],
    )
    .unwrap();
    assert_eq!(config.core.whitespace, Whitespace::Trailing);
    assert_eq!(config.core.rules, [Whitespace::Indent]);

    let messages: Vec<String> = diagnostics.iter().map(Diagnostic::to_string).collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages[0],
        r#"section "core", variable "rules": unknown whitespace rule "bogus""#
    );
    assert!(messages[1].starts_with(r#"section "core", variable "whitespace": blank value not supported"#));
}
