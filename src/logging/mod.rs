// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics for a generation run.
//!
//! ```text
//! [global] output_log_level ──> console layer ──> stderr   (stdout stays "Ready")
//! [global] file_log_level   ──> file layer    ──> log_file (non-blocking, optional)
//!                                                   │
//!                                               LogGuard flushes on drop
//! ```
//!
//! | Level | Filter | What a run reports                              |
//! |-------|--------|-------------------------------------------------|
//! | 0     | off    | nothing                                         |
//! | 1     | error  | failures                                        |
//! | 2     | warn   | skipped empty stems, submodules without a path  |
//! | 3     | info   | each stem found, each script written            |
//! | 4     | debug  | effective config, parsed counts, dry-run text   |
//! | 5     | trace  | every ignored declaration line                  |

use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, FsError, Result};

/// Verbosity as written in `[global]`, 0 (silent) to 5 (trace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` above 5.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "output_log_level".to_string(),
            message: format!("log level must be 0-5, got {level}"),
        })
    }

    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 5 { Some(Self(level)) } else { None }
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::new(self.to_filter_string())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.to_filter_string())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Where diagnostics go and how much of them.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
    /// Prefix console lines with the module, e.g. `rearchive::stem::discovery`.
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// An empty `log_file` disables the file layer.
impl From<&GlobalConfig> for LogConfig {
    fn from(global: &GlobalConfig) -> Self {
        let log_file = Some(global.log_file.clone()).filter(|p| !p.as_os_str().is_empty());
        Self::builder()
            .with_console_level(global.output_log_level)
            .with_file_level(global.file_log_level)
            .maybe_with_log_file(log_file)
            .build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Keeps the file writer alive; dropping it flushes the log file.
#[derive(Debug)]
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn console_layer(config: &LogConfig) -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_ansi(true)
        .with_filter(config.console_level().filter())
        .boxed()
}

fn file_layer(path: &Path, level: LogLevel) -> Result<(BoxedLayer, WorkerGuard)> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
    }
    let file = std::fs::File::create(path).map_err(|e| FsError::io(path, e))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_filter(level.filter())
        .boxed();
    Ok((layer, guard))
}

/// Installs the global subscriber for this run.
///
/// # Errors
///
/// Returns `FsError::IoError` if the log file or its directory cannot be
/// created, or an error if a subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use rearchive::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("logs/rearchive.log")
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::warn!(stem = "procts/empty", "stem declares no repositories, skipped");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers = vec![console_layer(config)];
    let mut file_guard = None;
    if let Some(path) = config.log_file() {
        let (layer, guard) = file_layer(path, config.file_level())?;
        layers.push(layer);
        file_guard = Some(guard);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests;
