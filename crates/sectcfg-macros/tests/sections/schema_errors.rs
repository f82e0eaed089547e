use std::collections::HashMap;

use sectcfg::{Assigner, Section, SchemaError};

#[derive(Debug, Clone, Default, Section)]
struct Ambiguous {
    foo_bar: String,
    #[sectcfg(rename = "foo-bar")]
    other: String,
}

#[derive(Debug, Clone, Default, Section)]
struct AmbiguousConfig {
    core: Ambiguous,
}

#[test]
fn test_ambiguous_fields() {
    let mut config = AmbiguousConfig::default();
    let error = Assigner::new(&mut config).err().unwrap();
    assert_eq!(
        error,
        SchemaError::AmbiguousField {
            type_name: "Ambiguous",
            first: "foo_bar",
            second: "other",
        }
    );
}

#[derive(Debug, Clone, Default, Section)]
struct Flat {
    name: String,
}

#[derive(Debug, Clone, Default, Section)]
struct NotSections {
    core: Flat,
    verbose: bool,
}

#[test]
fn test_root_field_must_be_section() {
    let mut config = NotSections::default();
    assert_eq!(
        Assigner::new(&mut config).err(),
        Some(SchemaError::NotASection {
            type_name: "NotSections",
            field: "verbose",
        })
    );
}

#[derive(Debug, Clone, Default, Section)]
struct TwoExtras {
    #[sectcfg(extra_values)]
    a: HashMap<String, String>,
    #[sectcfg(extra_values)]
    b: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Section)]
struct TwoExtrasConfig {
    core: TwoExtras,
}

#[test]
fn test_duplicate_extra_values() {
    let mut config = TwoExtrasConfig::default();
    assert!(matches!(
        Assigner::new(&mut config).err(),
        Some(SchemaError::DuplicateExtraValues { first: "a", second: "b", .. })
    ));
}

#[derive(Debug, Clone, Default, Section)]
struct MismatchedDefault {
    branch: HashMap<String, Box<Flat>>,
    default_branch: TwoExtras,
}

#[test]
fn test_default_section_type() {
    let mut config = MismatchedDefault::default();
    assert_eq!(
        Assigner::new(&mut config).err(),
        Some(SchemaError::DefaultTypeMismatch {
            type_name: "MismatchedDefault",
            field: "default_branch",
            section: "branch",
        })
    );
}
