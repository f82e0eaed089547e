use std::collections::HashMap;

use indexmap::IndexMap;
use sectcfg::{Entry, Section, assign_all};

#[derive(Debug, Clone, Default, Section)]
struct Remote {
    url: String,
    #[sectcfg(extra_values)]
    extra: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Section)]
struct Alias {
    #[sectcfg(tag = "extra_values")]
    commands: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Section)]
struct Config {
    remote: IndexMap<String, Box<Remote>>,
    alias: Alias,
}

#[test]
fn test_extra_values_append_in_order() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::value("remote", Some("origin"), "url", "https://example.com"),
            Entry::value("remote", Some("origin"), "pushurl", "a"),
            Entry::value("remote", Some("origin"), "pushurl", "b"),
            Entry::blank("remote", Some("origin"), "prune"),
            Entry::value("remote", Some("fork"), "pushurl", "c"),
        ],
    )
    .unwrap();
    assert!(diagnostics.is_empty());

    let origin = &config.remote["origin"];
    assert_eq!(origin.extra["pushurl"], ["a", "b"]);
    assert_eq!(origin.extra["prune"], [""]);
    assert_eq!(config.remote["fork"].extra["pushurl"], ["c"]);
    assert_eq!(
        config.remote.keys().collect::<Vec<_>>(),
        ["origin", "fork"]
    );
}

#[test]
fn test_extra_values_is_not_addressable() {
    let mut config = Config::default();
    assign_all(&mut config, [Entry::value("remote", Some("origin"), "extra", "x")]).unwrap();
    assert_eq!(config.remote["origin"].extra["extra"], ["x"]);
}

#[test]
fn test_raw_extra_values_tag_captures_unknown_names() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::value("alias", None, "st", "status"),
            Entry::value("alias", None, "co", "checkout"),
            Entry::value("alias", None, "st", "status -sb"),
        ],
    )
    .unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(config.alias.commands.len(), 2);
    assert_eq!(config.alias.commands["st"], "status -sb");
    assert_eq!(config.alias.commands["co"], "checkout");
}
