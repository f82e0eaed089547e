use sectcfg::{Entry, Section, assign_all};

#[derive(Debug, Clone, Default, PartialEq, Section)]
struct Core {
    #[sectcfg(rename = "bare")]
    bare_repo: bool,
    #[sectcfg(rename = "Max-Size")]
    max_size: u64,
    r#type: String,
}

#[derive(Debug, Clone, Default, Section)]
struct Config {
    core: Core,
}

#[test]
fn test_rename_replaces_field_name() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::blank("core", None, "BARE"),
            Entry::value("core", None, "bare-repo", "true"),
        ],
    )
    .unwrap();
    assert!(config.core.bare_repo);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_rename_is_not_folded() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::value("core", None, "max-size", "10"),
            Entry::value("core", None, "max_size", "20"),
        ],
    )
    .unwrap();
    assert_eq!(config.core.max_size, 10);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_raw_identifier() {
    let mut config = Config::default();
    let diagnostics = assign_all(&mut config, [Entry::value("core", None, "type", "commit")]).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(config.core.r#type, "commit");
    assert_eq!(Core::describe().fields[2].name, "type");
}
