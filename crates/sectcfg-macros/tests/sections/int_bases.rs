use sectcfg::{Diagnostic, Entry, Section, ValueError, assign_all};

#[derive(Debug, Clone, Default, Section)]
struct Limits {
    #[sectcfg(int = "d")]
    decimal: u32,
    #[sectcfg(int = "h")]
    hex: u32,
    #[sectcfg(int = "ho")]
    hex_or_octal: u32,
    #[sectcfg(tag = "mode,int=o")]
    permissions: u32,
    plain: i16,
}

#[derive(Debug, Clone, Default, Section)]
struct Config {
    limits: Limits,
}

fn apply(name: &str, value: &str) -> (Limits, Vec<Diagnostic>) {
    let mut config = Config::default();
    let diagnostics = assign_all(&mut config, [Entry::value("limits", None, name, value)]).unwrap();
    (config.limits, diagnostics.0)
}

#[test]
fn test_decimal_only() {
    let (limits, diagnostics) = apply("decimal", "0x10");
    assert_eq!(limits.decimal, 0);
    assert!(matches!(
        diagnostics.as_slice(),
        [Diagnostic::Value { error: ValueError::InvalidInt { .. }, .. }]
    ));
    assert_eq!(apply("decimal", "052").0.decimal, 52);
}

#[test]
fn test_hex_without_prefix() {
    assert_eq!(apply("hex", "ff").0.hex, 255);
    assert_eq!(apply("hex", "0x1F").0.hex, 31);
}

#[test]
fn test_hex_or_octal_needs_prefix() {
    let (_, diagnostics) = apply("hex-or-octal", "17");
    assert!(matches!(
        diagnostics.as_slice(),
        [Diagnostic::Value { error: ValueError::AmbiguousInt(_), .. }]
    ));
    assert_eq!(apply("hex_or_octal", "017").0.hex_or_octal, 15);
    assert_eq!(apply("hex_or_octal", "0x17").0.hex_or_octal, 23);
}

#[test]
fn test_tag_ident_and_mode() {
    assert_eq!(apply("mode", "755").0.permissions, 0o755);
    let (_, diagnostics) = apply("permissions", "755");
    assert!(matches!(diagnostics.as_slice(), [Diagnostic::ExtraData { .. }]));
}

#[test]
fn test_out_of_range() {
    let (limits, diagnostics) = apply("plain", "40000");
    assert_eq!(limits.plain, 0);
    assert!(matches!(
        diagnostics.as_slice(),
        [Diagnostic::Value { error: ValueError::IntOutOfRange { .. }, .. }]
    ));
}
