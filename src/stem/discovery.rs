// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stem discovery.
//!
//! ```text
//! root/
//!   a/ comp/flying_start/   -> Stem (declaration + manifest parsed)
//!   b/                      -> skipped, no marker
//!   c/ comp/flying_start/   -> Stem
//! ```
//!
//! Returns stems sorted by path for deterministic ordering.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};

use super::Stem;
use super::declaration::read_declarations;
use super::manifest::read_manifest;
use crate::config::types::{DiscoveryConfig, EmptyStemPolicy};
use crate::error::{RearchiveError, Result, StemError};
use crate::utility::fs::walk::{WalkOptions, list_subdirectories};

/// Builds the stem rooted at `dir` if it carries the marker subpath.
///
/// # Errors
///
/// Returns `StemError::ReadError` if the declaration file is missing or
/// unreadable, or the manifest exists but is unreadable.
pub fn load_stem(dir: &Path, config: &DiscoveryConfig) -> Result<Option<Stem>> {
    let marker_dir = dir.join(&config.marker);
    if !marker_dir.exists() {
        return Ok(None);
    }

    let repositories = read_declarations(&marker_dir.join(&config.declaration_file))?;
    let submodules = read_manifest(&dir.join(&config.manifest_file))?;
    for submodule in submodules.iter().filter(|s| s.path.is_empty()) {
        warn!(
            stem = %dir.display(),
            url = %submodule.url,
            "submodule has no path, rearchive scripts will skip it"
        );
    }

    debug!(
        stem = %dir.display(),
        repositories = repositories.len(),
        submodules = submodules.len(),
        "parsed stem"
    );

    Ok(Some(Stem::new(dir.to_path_buf(), repositories, submodules)))
}

/// Discovers every stem directly below `root`.
///
/// Stems without any repository are handled per `config.empty_stem`.
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or is not a directory.
/// - A stem's declaration file is missing or unreadable.
/// - A stem declares no repositories and the policy is `error`.
pub fn discover_stems(root: &Path, config: &DiscoveryConfig) -> Result<Vec<Stem>> {
    let mut stems = Vec::new();

    for dir in list_subdirectories(root, &WalkOptions::for_stem_scan())? {
        let Some(stem) = load_stem(&dir, config)
            .with_context(|| format!("failed to load stem {}", dir.display()))?
        else {
            continue;
        };

        if stem.repositories().is_empty() {
            match config.empty_stem {
                EmptyStemPolicy::Error => {
                    let err = RearchiveError::from(StemError::NoRepositories {
                        stem: dir.display().to_string(),
                    });
                    return Err(err.into());
                }
                EmptyStemPolicy::Skip => {
                    warn!(stem = %dir.display(), "stem declares no repositories, skipped");
                    continue;
                }
            }
        }

        info!(
            stem = %dir.display(),
            submodules = stem.submodules().len(),
            "found stem"
        );
        stems.push(stem);
    }

    Ok(stems)
}
