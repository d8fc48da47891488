// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for rearchive.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. rearchive.toml (cwd, optional)
//! 3. --config FILE
//! 4. REARCHIVE_* env vars
//! 5. --set KEY=VALUE
//! 6. dedicated CLI flags (--account, --api-url)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! REARCHIVE_GITHUB__ACCOUNT_NAME=me   → github.account_name = "me"
//! REARCHIVE_DISCOVERY__EMPTY_STEM=skip → discovery.empty_stem = "skip"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{DiscoveryConfig, GithubConfig, GlobalConfig, RearchiveConfig, UsbConfig};

/// Default name of the configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "rearchive.toml";

/// Prefix of the environment variables read by the loader.
pub const ENV_PREFIX: &str = "REARCHIVE";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Stem discovery options.
    pub discovery: DiscoveryConfig,
    /// Git options of the rearchive scripts.
    pub rearchive: RearchiveConfig,
    /// Local archive target.
    pub usb: UsbConfig,
    /// Remote service target.
    pub github: GithubConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rearchive::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("rearchive.toml")
    ///     .with_env_prefix("REARCHIVE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global.log_file.display().to_string(),
        );
        options.insert(
            "discovery.marker".to_string(),
            self.discovery.marker.display().to_string(),
        );
        options.insert(
            "discovery.declaration_file".to_string(),
            self.discovery.declaration_file.clone(),
        );
        options.insert(
            "discovery.manifest_file".to_string(),
            self.discovery.manifest_file.clone(),
        );
        options.insert(
            "discovery.empty_stem".to_string(),
            self.discovery.empty_stem.to_string(),
        );
        options.insert("rearchive.branch".to_string(), self.rearchive.branch.clone());
        options.insert(
            "rearchive.commit_message".to_string(),
            self.rearchive.commit_message.clone(),
        );
        options.insert("usb.archive_root".to_string(), self.usb.archive_root.clone());
        options.insert("usb.archive_dir".to_string(), self.usb.archive_dir.clone());
        options.insert(
            "usb.archive_prefix_1".to_string(),
            self.usb.archive_prefix_1.clone(),
        );
        options.insert(
            "usb.archive_prefix_2".to_string(),
            self.usb.archive_prefix_2.clone(),
        );
        options.insert(
            "github.account_name".to_string(),
            self.github.account_name.clone(),
        );
        options.insert(
            "github.api_base_url".to_string(),
            self.github.api_base_url.clone(),
        );
        options.insert(
            "github.archive_prefix_1".to_string(),
            self.github.archive_prefix_1.clone(),
        );
        options.insert(
            "github.archive_prefix_2".to_string(),
            self.github.archive_prefix_2.clone(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
