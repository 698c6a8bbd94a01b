//! Tests for loading game configuration from disk.

use std::io::Write;
use std::time::Duration;
use tictactoe_cli::{GameConfig, GameMode};
use tictactoe_core::Mark;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
mode = "pvp"
human_mark = "O"
engine_delay_ms = 0
engine_name = "Deep Thought"
human_name = "Ada"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::PlayerVsPlayer);
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(config.engine_delay(), Duration::ZERO);
    assert_eq!(config.engine_name(), "Deep Thought");
    assert_eq!(config.human_name(), "Ada");
}

#[test]
fn test_partial_config_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "engine_delay_ms = 250").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::PlayerVsEngine);
    assert_eq!(*config.human_mark(), Mark::X);
    assert_eq!(*config.engine_delay_ms(), 250);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_config_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"mode = "solo""#).unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
