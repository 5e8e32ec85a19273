#[cfg(test)]
use super::*;
use std::collections::HashMap;
use std::io::Write;

use crate::{JiniError, Value};

#[test]
fn test_config_from_string() {
    let config_content = "[app]\n\
                          # application settings\n\
                          name = \"TestApp\"\n\
                          version = \"1.0.0\"\n\
                          debug = true\n\
                          port = 8080\n\
                          features = [\"auth\",\n\
                          \x20           \"logging\"]\n";

    let config = JiniConfig::from_str(config_content).expect("Failed to parse config");

    let name: String = config.get("app", "name").expect("Failed to get name");
    assert_eq!(name, "TestApp");

    let port: u16 = config.get("app", "port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = config.get("app", "debug").expect("Failed to get debug");
    assert!(debug);

    let features: Vec<String> = config.get("app", "features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    assert!(config.has_option("app", "name"));
    assert!(!config.has_option("app", "nonexistent"));
}

#[test]
fn test_default_fallback() {
    let config_content = "[DEFAULT]\n\
                          retries = 3\n\
                          greeting = \"hello\"\n\
                          [service]\n\
                          retries = 5\n";

    let config = JiniConfig::from_str(config_content).expect("Failed to parse config");

    // Own value wins over DEFAULT.
    let retries: i64 = config.get("service", "retries").expect("Failed to get retries");
    assert_eq!(retries, 5);

    // Unset in the section, inherited from DEFAULT.
    let greeting: String = config.get("service", "greeting").expect("Failed to get greeting");
    assert_eq!(greeting, "hello");

    // Lookup is idempotent.
    assert_eq!(
        config.get_value("service", "greeting"),
        config.get_value("service", "greeting")
    );
}

#[test]
fn test_fallback_requires_existing_section() {
    let config = JiniConfig::from_str("[DEFAULT]\noption = \"set-in-defaults\"\n")
        .expect("Failed to parse config");

    // Only fall back to defaults if the section exists.
    let err = config.get_value("section", "option").unwrap_err();
    assert_eq!(err, JiniError::NoSection { section: "section".into() });

    let config = JiniConfig::from_str(
        "[DEFAULT]\noption = \"set-in-defaults\"\n[section]\nother = 1\n",
    )
    .expect("Failed to parse config");
    let option: String = config.get("section", "option").expect("Failed to get option");
    assert_eq!(option, "set-in-defaults");
}

#[test]
fn test_missing_option_error() {
    let config = JiniConfig::from_str("[s]\nx = 1\n").expect("Failed to parse config");
    let err = config.get_value("s", "missing").unwrap_err();
    assert_eq!(
        err,
        JiniError::NoOption { section: "s".into(), option: "missing".into() }
    );
}

#[test]
fn test_has_option_on_unknown_section_is_false() {
    let config = JiniConfig::from_str("[DEFAULT]\nd = 1\n").expect("Failed to parse config");
    assert!(!config.has_option("nonexistent", "d"));
    assert!(config.has_option("DEFAULT", "d"));
}

#[test]
fn test_sections_exclude_default() {
    let config = JiniConfig::from_str("[a]\n[DEFAULT]\nd = 1\n[b]\n")
        .expect("Failed to parse config");
    assert_eq!(config.sections().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(config.has_section("DEFAULT"));
    assert_eq!(config.defaults().get("d"), Some(&Value::Int(1)));
}

#[test]
fn test_options_order_own_then_default_only() {
    let config_content = "[DEFAULT]\n\
                          zeta = 1\n\
                          alpha = 2\n\
                          [s]\n\
                          mike = 3\n\
                          alpha = 4\n";
    let config = JiniConfig::from_str(config_content).expect("Failed to parse config");

    // Own keys in insertion order, then DEFAULT-only keys in DEFAULT order.
    assert_eq!(config.options("s").expect("Failed to list options"), vec!["mike", "alpha", "zeta"]);

    let section = config.section("s").expect("Failed to get section view");
    assert_eq!(section.get("alpha"), Ok(&Value::Int(4)));
    assert_eq!(section.get("zeta"), Ok(&Value::Int(1)));
    assert_eq!(section.len(), 3);

    let err = config.options("missing").unwrap_err();
    assert!(matches!(err, JiniError::NoSection { .. }));
}

#[test]
fn test_get_optional_and_get_or() {
    let config = JiniConfig::from_str("[s]\nx = 1\n").expect("Failed to parse config");

    let x: Option<i64> = config.get_optional("s", "x").expect("Failed to get x");
    assert_eq!(x, Some(1));

    let missing: Option<i64> = config.get_optional("s", "missing").expect("Failed to get");
    assert_eq!(missing, None);

    // Unknown section is still an error, even for get_optional.
    assert!(config.get_optional::<i64>("missing", "x").is_err());

    assert_eq!(config.get_or("s", "x", 0i64), 1);
    assert_eq!(config.get_or("s", "missing", 7i64), 7);
}

#[test]
fn test_null_value_reads_as_none() {
    let config = JiniConfig::from_str("[s]\nmaybe = null\n").expect("Failed to parse config");
    let maybe: Option<String> = config.get("s", "maybe").expect("Failed to get maybe");
    assert_eq!(maybe, None);
}

#[test]
fn test_object_value_conversions() {
    let config = JiniConfig::from_str("[s]\nmap = {\"a\": \"1\", \"b\": \"2\"}\n")
        .expect("Failed to parse config");

    let map: HashMap<String, String> = config.get("s", "map").expect("Failed to get map");
    assert_eq!(map.get("a").map(String::as_str), Some("1"));
    assert_eq!(map.get("b").map(String::as_str), Some("2"));

    let ordered: indexmap::IndexMap<String, Value> =
        config.get("s", "map").expect("Failed to get map");
    assert_eq!(ordered.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_numeric_conversion_errors() {
    let config = JiniConfig::from_str("[s]\nbig = 70000\nf = 1.5\n")
        .expect("Failed to parse config");

    let err = config.get::<u16>("s", "big").unwrap_err();
    assert!(matches!(err, JiniError::TypeError { code: Some(407), .. }));

    // Floats do not silently truncate to integers.
    let err = config.get::<i64>("s", "f").unwrap_err();
    assert!(matches!(err, JiniError::TypeError { code: Some(403), .. }));

    let f: f64 = config.get("s", "f").expect("Failed to get f");
    assert_eq!(f, 1.5);
}

#[test]
fn test_type_error_carries_line_info() {
    let config = JiniConfig::from_str("[s]\nport = \"not a number\"\n")
        .expect("Failed to parse config");

    let err = config.get::<u16>("s", "port").unwrap_err();
    match err {
        JiniError::TypeError { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("port = \"not a number\""));
        }
        other => panic!("Expected TypeError, got {}", other),
    }
}

#[test]
fn test_get_optional_type_error_carries_line_info() {
    let config = JiniConfig::from_str("[s]\nport = \"not a number\"\n")
        .expect("Failed to parse config");

    // Same line enhancement as get().
    let err = config.get_optional::<u16>("s", "port").unwrap_err();
    assert!(matches!(err, JiniError::TypeError { line: 2, .. }));
}

#[test]
fn test_config_is_debuggable() {
    let config = JiniConfig::from_str("[s]\nx = 1\n").expect("Failed to parse config");
    let rendered = format!("{:?}", config);
    assert!(rendered.contains("JiniConfig"));
}

#[test]
fn test_string_enum_validation() {
    let config = JiniConfig::from_str("[theme]\nborder = \"rounded\"\ninvalid = \"bad\"\n")
        .expect("Failed to parse config");

    let border = config.get_string_enum("theme", "border", &["plain", "rounded", "thick"]);
    assert_eq!(border.expect("Failed to validate border"), "rounded");

    let invalid = config.get_string_enum("theme", "invalid", &["good", "better"]);
    assert!(matches!(invalid, Err(JiniError::ValidationError { line: 3, .. })));
}

#[test]
fn test_get_validated() {
    let config = JiniConfig::from_str("[server]\nport = 99\n").expect("Failed to parse config");

    let port = config.get_validated("server", "port", |p: &u16| *p >= 1024, "1024-65535");
    assert!(matches!(port, Err(JiniError::ValidationError { code: Some(450), .. })));

    let port = config
        .get_validated("server", "port", |p: &u16| *p > 0, "1-65535")
        .expect("Failed to validate port");
    assert_eq!(port, 99u16);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "[section]\nfoo = \"bar\"\n").expect("Failed to write temp file");

    let config = JiniConfig::from_file(file.path()).expect("Failed to load config");
    let foo: String = config.get("section", "foo").expect("Failed to get foo");
    assert_eq!(foo, "bar");
}

#[test]
fn test_from_file_missing() {
    let err = JiniConfig::from_file("/definitely/not/here.conf").unwrap_err();
    assert!(matches!(err, JiniError::FileError { code: Some(301), .. }));
}

#[test]
fn test_from_file_with_fallback() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "[section]\nfoo = \"from-fallback\"\n").expect("Failed to write temp file");

    let config = JiniConfig::from_file_with_fallback(
        std::path::Path::new("/definitely/not/here.conf"),
        file.path(),
    )
    .expect("Failed to load config via fallback");
    let foo: String = config.get("section", "foo").expect("Failed to get foo");
    assert_eq!(foo, "from-fallback");

    let err = JiniConfig::from_file_with_fallback("/nope/one.conf", "/nope/two.conf").unwrap_err();
    assert!(matches!(err, JiniError::FileError { code: Some(302), .. }));
}

#[test]
fn test_parse_error_yields_no_config() {
    // All-or-nothing: a late parse error discards everything before it.
    let result = JiniConfig::from_str("[a]\ngood = 1\n[b]\nbad = not-json\n");
    assert!(result.is_err());
}

#[test]
fn test_reparse_replaces_document() {
    let first = JiniConfig::from_str("[s]\nx = 1\n").expect("Failed to parse");
    let second = JiniConfig::from_str("[s]\nx = 2\n").expect("Failed to parse");
    assert_eq!(first.get_value("s", "x"), Ok(&Value::Int(1)));
    assert_eq!(second.get_value("s", "x"), Ok(&Value::Int(2)));
}
