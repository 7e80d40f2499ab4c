// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::category::Category;
use tempfile::TempDir;

#[test]
fn defaults_match_reference_layout() {
    let config = HarnessConfig::default();
    assert_eq!(config.compiler, PathBuf::from("./k0"));
    assert_eq!(config.test_root, PathBuf::from("tests"));
    assert_eq!(config.timeout_ms.get(), 10_000);
    assert_eq!(config.policy, DiagnosticPolicy::Stderr);
    assert_eq!(config.transcript, None);
    assert_eq!(config.fixtures.dir, PathBuf::from("lex_tests"));
    assert_eq!(config.categories.names(), vec!["errors", "k0", "kotlin"]);
}

#[test]
fn empty_file_is_all_defaults() {
    let config: HarnessConfig = toml::from_str("").unwrap();
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn parses_full_config() {
    let toml_str = r#"
        compiler = "build/k0"
        test_root = "conformance"
        timeout_ms = 2500
        policy = "exit-code"
        transcript = "results.txt"

        [fixtures]
        dir = "conformance/errors"
        catalog = "tokens.txt"

        [[categories]]
        name = "errors"
        expect_error = true

        [[categories]]
        name = "k0"
        expect_error = false
    "#;
    let config: HarnessConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.compiler, PathBuf::from("build/k0"));
    assert_eq!(config.test_root, PathBuf::from("conformance"));
    assert_eq!(config.timeout_ms.get(), 2500);
    assert_eq!(config.policy, DiagnosticPolicy::ExitCode);
    assert_eq!(config.transcript, Some(PathBuf::from("results.txt")));
    assert_eq!(config.fixtures.dir, PathBuf::from("conformance/errors"));
    assert_eq!(config.fixtures.catalog, Some(PathBuf::from("tokens.txt")));
    assert_eq!(config.categories.names(), vec!["errors", "k0"]);
    assert_eq!(config.categories.get("k0"), Some(&Category::new("k0", false)));
}

#[test]
fn unknown_keys_are_rejected() {
    let result = toml::from_str::<HarnessConfig>("compilr = \"./k0\"");
    assert!(result.is_err());
}

#[test]
fn empty_category_list_is_rejected() {
    let result = toml::from_str::<HarnessConfig>("categories = []");
    assert!(result.is_err());
}

#[test]
fn from_file_keeps_defaults_for_missing_keys() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "test_root = \"corpus\"\n").unwrap();

    let config = HarnessConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();

    assert_eq!(config.test_root, PathBuf::from("corpus"));
    assert_eq!(config.compiler, PathBuf::from("./k0"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = HarnessConfig::discover(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "timeout_ms = \"soon\"").unwrap();

    let err = HarnessConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "timeout_ms = 0\n").unwrap();

    let err = HarnessConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "{}", err);
}

#[test]
fn overrides_replace_only_given_values() {
    let config = HarnessConfig::default().with_overrides(Some(PathBuf::from("/usr/bin/k0")), None);
    assert_eq!(config.compiler, PathBuf::from("/usr/bin/k0"));
    assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);

    let config = HarnessConfig::default().with_overrides(None, NonZeroU64::new(50));
    assert_eq!(config.compiler, PathBuf::from(DEFAULT_COMPILER));
    assert_eq!(config.timeout_ms.get(), 50);
}
