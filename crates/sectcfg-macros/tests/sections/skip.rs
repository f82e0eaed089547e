use sectcfg::{Entry, Section, assign_all};

#[derive(Debug, Clone, Default, Section)]
struct User {
    name: String,
    #[sectcfg(skip)]
    cached_signature: String,
}

#[derive(Debug, Clone, Default, Section)]
struct Config {
    user: User,
}

#[test]
fn test_skipped_field_is_not_settable() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::value("user", None, "name", "A U Thor"),
            Entry::value("user", None, "cached-signature", "x"),
        ],
    )
    .unwrap();
    assert_eq!(config.user.name, "A U Thor");
    assert_eq!(config.user.cached_signature, "");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(User::describe().fields.len(), 1);
}
