//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use crate::config::{Config, ConfigPaths, LogLevel};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.site.docs_dir, PathBuf::from("docs"));
    assert_eq!(config.site.pages_manifest, PathBuf::from("pages.json"));
    assert!(config.site.theme_overrides.is_none());
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[site]"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [site]
        title = "tasl"
        docs_dir = "content/docs"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.site.title, "tasl");
    assert_eq!(config.site.docs_dir, PathBuf::from("content/docs"));
    // Unspecified fields fall back to defaults.
    assert_eq!(config.site.pages_manifest, PathBuf::from("pages.json"));
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();

    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(format!("{original:?}"), format!("{deserialized:?}"));
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.site.title, "Schema Language Documentation");
}

#[test]
fn config_theme_overrides_path() {
    let toml_str = r#"
        [site]
        theme_overrides = "theme.json"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(
        config.site.theme_overrides,
        Some(PathBuf::from("theme.json"))
    );
}

#[test]
fn config_paths_valid() {
    if std::env::var("HOME").is_ok() {
        let main_path = ConfigPaths::main_config().unwrap();

        assert!(main_path.to_string_lossy().ends_with("config.toml"));
        assert!(
            main_path
                .parent()
                .map(|p| p.ends_with("docsite"))
                .unwrap_or(false)
        );
    }
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Debug.to_string(), "debug");
    assert_eq!(LogLevel::default().to_string(), "info");
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [site
        invalid syntax here
    "#;

    let result: Result<Config, toml::de::Error> = toml::from_str(invalid_toml);

    assert!(result.is_err());
}
