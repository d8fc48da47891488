// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stems: a primary repository plus its submodules.
//!
//! ```text
//! <root>/
//!   share000/                      Stem
//!     .gitmodules                  manifest    -> Vec<Submodule>
//!     comp/flying_start/           marker
//!       flying_start.cpp           declaration -> Vec<Repository>
//!   notes/                         (no marker, ignored)
//! ```
//!
//! Both input formats are read by best-effort line scanners: every line is
//! either an accepted record or ignored, never an error.

pub mod declaration;
pub mod discovery;
pub mod manifest;
mod scanner;


use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{RearchiveResult, StemError};
use crate::utility::encoding::decode_text;

/// A local working tree and the identifier of its repository on the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Path of the working tree, relative to the discovery root.
    pub local: String,
    /// Remote identifier.
    pub remote: String,
}

/// One submodule entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submodule {
    /// 1-based manifest line of the `path` key, 0 if there was none.
    pub line_number: usize,
    /// Path relative to the stem's working tree.
    pub path: String,
    /// URL the submodule was cloned from.
    pub url: String,
}

/// A discovered stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stem {
    root_path: PathBuf,
    repositories: Vec<Repository>,
    submodules: Vec<Submodule>,
}

impl Stem {
    #[must_use]
    pub const fn new(
        root_path: PathBuf,
        repositories: Vec<Repository>,
        submodules: Vec<Submodule>,
    ) -> Self {
        Self {
            root_path,
            repositories,
            submodules,
        }
    }

    /// Directory the stem was discovered in.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// All declared repositories, in file order.
    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Submodules in manifest order.
    #[must_use]
    pub fn submodules(&self) -> &[Submodule] {
        &self.submodules
    }

    /// The repository the stem is archived as: the last declared one.
    ///
    /// Earlier declarations are kept but take no part in script generation.
    ///
    /// # Errors
    ///
    /// Returns `StemError::NoRepositories` if the declaration file had no
    /// accepted line.
    pub fn primary_repository(&self) -> RearchiveResult<&Repository> {
        self.repositories.last().ok_or_else(|| {
            StemError::NoRepositories {
                stem: self.root_path.display().to_string(),
            }
            .into()
        })
    }
}

/// Reads a whole input file as text, whatever encoding it was saved in.
fn read_text(path: &Path) -> Result<String, std::io::Error> {
    let bytes = std::fs::read(path)?;
    Ok(match decode_text(&bytes) {
        Cow::Borrowed(text) => text.to_owned(),
        Cow::Owned(text) => text,
    })
}
