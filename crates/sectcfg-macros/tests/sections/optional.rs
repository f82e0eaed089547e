use std::path::PathBuf;

use sectcfg::{Entry, Scanned, Section, assign_all};

#[derive(Debug, Clone, Default, Section)]
struct Http {
    port: Option<u16>,
    proxy: Option<String>,
    cookies: Option<Vec<PathBuf>>,
    initial: Option<char>,
    ratio: Scanned<f64>,
}

#[derive(Debug, Clone, Default, Section)]
struct Config {
    http: Http,
}

#[test]
fn test_optional_allocated_on_success() {
    let mut config = Config::default();
    let diagnostics = assign_all(
        &mut config,
        [
            Entry::value("http", None, "port", "99999"),
            Entry::value("http", None, "proxy", "socks5://localhost"),
            Entry::value("http", None, "initial", "x"),
            Entry::value("http", None, "ratio", " 0.5 "),
        ],
    )
    .unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(config.http.port, None);
    assert_eq!(config.http.proxy.as_deref(), Some("socks5://localhost"));
    assert_eq!(config.http.initial, Some('x'));
    assert_eq!(*config.http.ratio, 0.5);
}

#[test]
fn test_optional_sequence() {
    let mut config = Config::default();
    assign_all(
        &mut config,
        [
            Entry::value("http", None, "cookies", "/tmp/a"),
            Entry::value("http", None, "cookies", "/tmp/b"),
        ],
    )
    .unwrap();
    assert_eq!(
        config.http.cookies,
        Some(vec![PathBuf::from("/tmp/a"), PathBuf::from("/tmp/b")])
    );

    assign_all(&mut config, [Entry::blank("http", None, "cookies")]).unwrap();
    assert_eq!(config.http.cookies, Some(vec![]));
}
