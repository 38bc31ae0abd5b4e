//! Loading configuration from disk.

use std::io::Write;
use std::time::Duration;
use tictactoe::AppConfig;

#[test]
fn test_loads_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
computer_delay_ms = 500
result_display_ms = 1500
fade_ms = 750
placement_ms = 200
seed = 42
log_file = "game.log"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    let timings = config.timings();
    assert_eq!(timings.computer_delay, Duration::from_millis(500));
    assert_eq!(timings.result_display, Duration::from_millis(1500));
    assert_eq!(timings.fade, Duration::from_millis(750));
    assert_eq!(config.placement(), Duration::from_millis(200));
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fade_ms = \"slow\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_no_path_uses_defaults() {
    assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
}
