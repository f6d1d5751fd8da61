use super::data::{ChapterSeed, Config};
use super::defaults::{
    DEFAULT_BIBLE, DEFAULT_LOG_HEIGHT, DEFAULT_OPENING_TITLE, DEFAULT_SIDEBAR_WIDTH,
    MIN_PANE_HEIGHT, MIN_SIDEBAR_WIDTH,
};
use super::io::ConfigError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
    assert_eq!(config.bible(), DEFAULT_BIBLE.to_vec());
    assert_eq!(
        config.opening_chapter().map(|seed| seed.title),
        Some(DEFAULT_OPENING_TITLE.to_string())
    );
    assert_eq!(config.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);
    assert_eq!(config.log_height(), DEFAULT_LOG_HEIGHT);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r##"
[project]
name = "Glass Harbor"
bible = ["Protagonist: Mira", "World: Glass Harbor", "Era: after the flood"]

[project.opening_chapter]
title = "Low Tide"

[theme]
accent = "#5f5fd7"
"##,
    )
    .unwrap();

    let config = Config::load_from_path(&config_path).expect("load failed");

    assert_eq!(config.project_name(), "Glass Harbor");
    assert_eq!(config.bible().len(), 3);
    assert_eq!(
        config.opening_chapter(),
        Some(ChapterSeed {
            title: "Low Tide".into(),
            body: String::new(),
        })
    );
    assert_eq!(config.theme.accent.as_deref(), Some("#5f5fd7"));
    assert_eq!(config.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);
}

#[test]
fn test_seed_opening_chapter_false_starts_empty() {
    let config: Config = toml::from_str("[project]\nseed_opening_chapter = false\n").unwrap();
    assert_eq!(config.opening_chapter(), None);
}

#[test]
fn test_layout_values_are_clamped() {
    let config: Config =
        toml::from_str("[layout]\nsidebar_width = 2\nlog_height = 1\ninput_height = 0\n").unwrap();
    assert_eq!(config.sidebar_width(), MIN_SIDEBAR_WIDTH);
    assert_eq!(config.log_height(), MIN_PANE_HEIGHT);
    assert_eq!(config.input_height(), MIN_PANE_HEIGHT);
}

#[test]
fn test_invalid_toml_reports_parse_error_with_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[project\nname = ").unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse config at"));
}

#[test]
fn test_write_default_round_trips_and_refuses_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    Config::write_default(&config_path, false).expect("initial write failed");
    let loaded = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(loaded, Config::with_defaults());

    let err = Config::write_default(&config_path, false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));

    Config::write_default(&config_path, true).expect("forced write failed");
}
