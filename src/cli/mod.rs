// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! rearchive [global options] <MODE>
//!   usb      init_usb.sh, rearchive_usb.sh, delete_git.sh
//!   github   init_github.sh, delete_github.sh, rearchive_github.sh, delete_git.sh
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use crate::script::ScriptSet;
use clap::{Parser, ValueEnum};

/// Git stem migration script generator.
///
/// Scans a directory of stems and writes the shell scripts that move every
/// repository and submodule into a fresh archive.
#[derive(Debug, Parser)]
#[command(
    name = "rearchive",
    author,
    version,
    about = "Generate the shell scripts that re-archive a tree of git stems",
    long_about = "rearchive Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans the immediate subdirectories of the root for stems and\n\
                  writes the migration scripts for the selected archive.\n\
                  Nothing is executed; review the scripts before running them.",
    after_help = "CONFIG FILES:\n\n\
                  rearchive reads `rearchive.toml` from the current directory if\n\
                  present. Additional files can be given with --config, those are\n\
                  loaded after it. Environment variables such as\n\
                  REARCHIVE_GITHUB__ACCOUNT_NAME override the files, and --set and\n\
                  the dedicated flags override everything else."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Archive to generate scripts for
    #[arg(value_enum)]
    pub mode: Mode,
}

/// Target archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Local bare repositories, e.g. on a USB drive.
    Usb,
    /// Remote hosting service.
    Github,
}

impl Mode {
    /// Scripts written in this mode.
    #[must_use]
    pub const fn scripts(self) -> ScriptSet {
        match self {
            Self::Usb => ScriptSet::INIT_LOCAL_ARCHIVE
                .union(ScriptSet::REARCHIVE_LOCAL_ARCHIVE)
                .union(ScriptSet::DELETE_LOCAL_ARCHIVE),
            Self::Github => ScriptSet::REMOTE_SERVICE.union(ScriptSet::DELETE_LOCAL_ARCHIVE),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
