// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Options for directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore and .ignore files
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns the maximum depth to traverse.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns whether to include hidden files/directories.
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns whether to respect .gitignore files.
    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    /// Options for scanning a root for stems.
    ///
    /// - One level deep
    /// - Hidden directories included
    /// - Ignore files not honoured, a stem may well be listed in one
    /// - Symbolic links followed, like a plain directory listing
    #[must_use]
    pub fn for_stem_scan() -> Self {
        Self::builder()
            .with_max_depth(1)
            .with_follow_links(true)
            .with_include_hidden(true)
            .with_respect_gitignore(false)
            .build()
    }
}

/// Builds a `WalkBuilder` with the given options.
pub(super) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.max_depth(options.max_depth());
    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());

    builder.ignore(options.respect_gitignore());
    builder.parents(options.respect_gitignore());
    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());

    builder.sort_by_file_name(|a, b| a.cmp(b));

    builder
}

/// Lists the directories directly below `root`, sorted by path.
///
/// Entries that cannot be read are logged and skipped. `root` itself is never
/// part of the result.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `root` does not exist or is not a directory.
///
/// # Example
/// ```no_run
/// use rearchive::utility::fs::walk::{list_subdirectories, WalkOptions};
///
/// for dir in list_subdirectories("/path/to/procts", &WalkOptions::for_stem_scan())? {
///     println!("{}", dir.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_subdirectories<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    let mut directories = Vec::new();
    for entry in build_walker(root, options).build() {
        match entry {
            Ok(entry) => {
                if entry.depth() == 1 && entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    directories.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "walk error"),
        }
    }

    directories.sort();
    Ok(directories)
}
