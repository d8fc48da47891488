// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options shared by both modes.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --set KEY=VAL     ← Direct config override (section.key=value)
//! --account NAME    ← github.account_name
//! --api-url URL     ← github.api_base_url
//! --log-level N     ← global.output_log_level (0-5)
//! --log-file FILE   ← global.log_file
//!
//! Precedence: dedicated flags > --set > environment > --config > rearchive.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Directory whose immediate subdirectories are scanned for stems.
    #[arg(short = 'r', long = "root", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Directory the scripts are written to.
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Account owning the repositories on the hosting service.
    #[arg(short = 'a', long = "account", value_name = "NAME")]
    pub account: Option<String>,

    /// Base URL of the hosting service API.
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Sets an option, such as 'rearchive.branch=main'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Renders the scripts without writing them.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Adds the configuration sources and overrides these options describe.
    ///
    /// `--set` overrides are applied first so that dedicated flags win.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a `--set` option is not `KEY=VALUE`.
    pub fn apply_to(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }

        for option in &self.options {
            loader = loader.set_override(option)?;
        }

        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level));
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string());
        }

        if let Some(ref account) = self.account {
            loader = loader.set("github.account_name", account.clone());
        }

        if let Some(ref url) = self.api_url {
            loader = loader.set("github.api_base_url", url.clone());
        }

        Ok(loader)
    }
}
