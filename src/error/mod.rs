// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              RearchiveError (~24 bytes)
//!                     |
//!   +---------+-------+-------+---------+
//!   |         |       |       |    |    |
//!   v         v       v       v    v    v
//! Argument  Invalid  Stem   Cfg   Fs   Io
//! Box<str>  Box<str> Box    Box   Box  Box
//!
//! Sub-errors (unboxed internally):
//!   Stem    ReadError, NoRepositories
//!   Config  MissingKey, InvalidValue
//!   Fs      NotFound, IoError
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RearchiveError`].
pub type RearchiveResult<T> = std::result::Result<T, RearchiveError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum RearchiveError {
    /// Missing or unrecognized command-line argument.
    #[error("argument error: {0}")]
    Argument(Box<str>),

    /// Input that an operation is not defined for.
    #[error("invalid input: {0}")]
    InvalidInput(Box<str>),

    /// Reading a stem's declaration or manifest failed.
    #[error("stem error: {0}")]
    Stem(#[from] Box<StemError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a [`RearchiveError::Argument`].
pub fn argument_error(message: impl Into<String>) -> RearchiveError {
    RearchiveError::Argument(message.into().into_boxed_str())
}

/// Create a [`RearchiveError::InvalidInput`].
pub fn invalid_input(message: impl Into<String>) -> RearchiveError {
    RearchiveError::InvalidInput(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RearchiveError {
                fn from(err: $error) -> Self {
                    RearchiveError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StemError => Stem,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Stem Errors ---

/// Errors while building a stem from its declaration and manifest files.
#[derive(Debug, Error)]
pub enum StemError {
    /// A declaration or manifest file could not be read.
    #[error("'{path}' cannot be opened for reading: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The declaration file yielded no repository, so the stem has no primary repository.
    #[error("stem '{stem}' declares no repositories")]
    NoRepositories { stem: String },
}

impl StemError {
    /// Build a [`StemError::ReadError`] for `path`.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Build a [`FsError::IoError`] for `path`.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
