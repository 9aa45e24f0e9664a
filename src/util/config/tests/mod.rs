//! 配置加载测试

use crate::util::config::{load_config_from, parse_config, UserConfig};
use crate::util::logger::LogLevel;
use std::io::Write;

#[test]
fn test_empty_config_is_default() {
    assert_eq!(parse_config("").unwrap(), UserConfig::default());
}

#[test]
fn test_partial_sections() {
    let config = parse_config("[compile]\npredeclare_classes = true\n\n[log]\nlevel = \"debug\"\n").unwrap();
    assert!(config.compile.predeclare_classes);
    assert_eq!(config.compile.tab_width, 4);
    assert_eq!(config.log.level, LogLevel::Debug);
    assert!(config.diagnostics.colors);
}

#[test]
fn test_invalid_value_is_parse_error() {
    let err = parse_config("[log]\nlevel = \"loud\"\n").unwrap_err();
    assert!(err.to_string().starts_with("Config parse error"), "{}", err);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[compile]\ntab_width = 8\n[diagnostics]\ncolors = false").unwrap();

    let config = load_config_from(file.path()).unwrap();
    assert_eq!(config.compile.tab_width, 8);
    assert!(!config.diagnostics.colors);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}
