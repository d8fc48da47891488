// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use crate::config::types::GlobalConfig;
use std::path::{Path, PathBuf};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .map(|level| LogLevel::new(level).unwrap().to_filter_string())
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let err = serde_json::from_str::<LogLevel>("7").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-5, got 7"));
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_level_display() {
    assert_eq!(LogLevel::WARN.to_string(), "2 (warn)");
    assert!(LogLevel::DEBUG > LogLevel::INFO);
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        output_log_level: LogLevel::WARN,
        file_log_level: LogLevel::DEBUG,
        log_file: PathBuf::from("logs/rearchive.log"),
    };
    let config = LogConfig::from(&global);
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some(Path::new("logs/rearchive.log")));
}

#[test]
fn test_log_config_from_global_without_file() {
    let config = LogConfig::from(&GlobalConfig::default());
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert!(config.log_file().is_none());
}
