//! Tests for client configuration loading.

use std::io::Write;
use tictactoe_online::ClientConfig;

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.server_url(), "ws://127.0.0.1:3000/ws");
    assert_eq!(config.log_filter(), "info,tictactoe_online=debug");
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"server_url = "wss://play.example.com/ws""#).unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.server_url(), "wss://play.example.com/ws");
    // Missing keys fall back to defaults
    assert_eq!(config.log_filter(), "info,tictactoe_online=debug");
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server_url = ").unwrap();

    let err = ClientConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_override() {
    let config = ClientConfig::default().with_server_url("ws://10.0.0.2:9000/ws");
    assert_eq!(config.server_url(), "ws://10.0.0.2:9000/ws");
}
