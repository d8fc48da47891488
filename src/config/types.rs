// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for rearchive.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, DiscoveryConfig, RearchiveConfig, UsbConfig, GithubConfig
//! ```
//!
//! # Empty Stem Policy
//!
//! ```text
//! EmptyStemPolicy: Error (default) | Skip
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables file logging.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// What to do with a stem whose declaration file yields no repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyStemPolicy {
    /// Abort the run.
    #[default]
    Error,
    /// Drop the stem with a warning.
    Skip,
}

impl std::fmt::Display for EmptyStemPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for EmptyStemPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::InvalidValue {
                section: "discovery".to_string(),
                key: "empty_stem".to_string(),
                message: format!("expected 'error' or 'skip', got '{s}'"),
            }),
        }
    }
}

/// Where stems and their input files are found.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Subpath whose presence marks a directory as a stem.
    pub marker: PathBuf,
    /// Declaration file name inside the marker directory.
    pub declaration_file: String,
    /// Submodule manifest file name at the stem root.
    pub manifest_file: String,
    /// Handling of stems without repositories.
    pub empty_stem: EmptyStemPolicy,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            marker: PathBuf::from("comp").join("flying_start"),
            declaration_file: "flying_start.cpp".to_string(),
            manifest_file: ".gitmodules".to_string(),
            empty_stem: EmptyStemPolicy::Error,
        }
    }
}

/// Git settings shared by both rearchive scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RearchiveConfig {
    /// Branch pushed to the new remotes.
    pub branch: String,
    /// Message of the single commit each repository is re-created with.
    pub commit_message: String,
}

impl Default for RearchiveConfig {
    fn default() -> Self {
        Self {
            branch: "master".to_string(),
            commit_message: "Initial check-in".to_string(),
        }
    }
}

/// Local bare-repository archive ("usb") settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsbConfig {
    /// Directory the init script changes into before creating the archive.
    pub archive_root: String,
    /// Directory below `archive_root` holding the bare repositories.
    pub archive_dir: String,
    /// First remote URL fragment (scheme and relative hops).
    pub archive_prefix_1: String,
    /// Second remote URL fragment (archive location).
    pub archive_prefix_2: String,
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            archive_root: "../procts_repo".to_string(),
            archive_dir: "git".to_string(),
            archive_prefix_1: "file://../../".to_string(),
            archive_prefix_2: "procts_repo/git/".to_string(),
        }
    }
}

impl UsbConfig {
    /// Remote URL of the archived repository `id`.
    #[must_use]
    pub fn remote_url(&self, id: &str) -> String {
        format!("{}{}{id}/", self.archive_prefix_1, self.archive_prefix_2)
    }
}

/// Remote hosting service ("github") settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    /// Account owning the created repositories.
    pub account_name: String,
    /// Base URL of the hosting API.
    pub api_base_url: String,
    /// URL scheme fragment, e.g. `https://`.
    pub archive_prefix_1: String,
    /// Host fragment, e.g. `github.com`.
    pub archive_prefix_2: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            account_name: String::new(),
            api_base_url: "https://api.github.com".to_string(),
            archive_prefix_1: "https://".to_string(),
            archive_prefix_2: "github.com".to_string(),
        }
    }
}

impl GithubConfig {
    /// Public remote URL of the repository `id`.
    #[must_use]
    pub fn remote_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}/{id}/",
            self.archive_prefix_1, self.archive_prefix_2, self.account_name
        )
    }

    /// Push URL of the repository `id` with the `$password` shell variable embedded.
    #[must_use]
    pub fn push_url(&self, id: &str) -> String {
        format!(
            "{}{account}:$password@{}/{account}/{id}",
            self.archive_prefix_1,
            self.archive_prefix_2,
            account = self.account_name
        )
    }

    /// Validate the settings the github scripts cannot do without.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if `account_name` or `api_base_url` is empty.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [
            ("account_name", &self.account_name),
            ("api_base_url", &self.api_base_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "github".to_string(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}
