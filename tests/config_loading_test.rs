//! Config discovery and validation against real files

use indoc::indoc;
use portfolio_evm::config::{
    discover_config, load_config, load_config_from_path, PortfolioConfig, CONFIG_FILE_NAME,
};
use portfolio_evm::io::OutputFormat;
use portfolio_evm::Error;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [classification]
            critical_index = 0.85

            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.classification.critical_index, 0.85);
    assert_eq!(config.classification.healthy_index, 1.0);
    assert_eq!(config.query, PortfolioConfig::default().query);
    assert_eq!(config.output.default_format, Some(OutputFormat::Json));
}

#[test]
fn config_is_found_in_an_ancestor_directory() {
    let root = TempDir::new().unwrap();
    let nested = root.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {"
            [query]
            top_n = 3
        "},
    )
    .unwrap();

    let config = discover_config(nested);
    assert_eq!(config.query.top_n, 3);
}

#[test]
fn broken_discovered_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[query\ntop_n = ").unwrap();

    let config = discover_config(dir.path().to_path_buf());
    assert_eq!(config, PortfolioConfig::default());
}

#[test]
fn explicit_file_reports_every_invalid_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        indoc! {"
            [classification]
            off_track_high_risks = 0

            [query]
            top_n = 0
        "},
    )
    .unwrap();

    let err = load_config(Some(path.as_path())).unwrap_err();
    let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["classification.off_track_high_risks", "query.top_n"]
    );
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, Error::FileSystem { .. }));
}
