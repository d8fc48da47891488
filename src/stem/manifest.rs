// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule manifest of a stem (`.gitmodules`).
//!
//! ```text
//! [submodule "comp/lib"]      ignored
//!     path = comp/lib         pending path (line 2)
//!     url = https://.../id/   -> Submodule { 2, "comp/lib", url }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use super::Submodule;
use super::scanner::LineScanner;
use crate::error::{RearchiveResult, StemError};

/// Kind of a manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLine<'a> {
    /// `path = <value>`
    Path(&'a str),
    /// `url = <value>`
    Url(&'a str),
    /// Anything else.
    Ignored,
}

/// Classifies one manifest line as `key SEP value`.
///
/// The key and value are whitespace-delimited words and the separator is a
/// single character, so `path=x` without spaces is not recognised. A missing
/// value reads as empty.
#[must_use]
pub fn classify_line(line: &str) -> ManifestLine<'_> {
    let mut scanner = LineScanner::new(line);
    let (Some(key), Some('=')) = (scanner.next_word(), scanner.next_char()) else {
        return ManifestLine::Ignored;
    };
    let value = scanner.next_word().unwrap_or_default();
    match key {
        "path" => ManifestLine::Path(value),
        "url" => ManifestLine::Url(value),
        _ => ManifestLine::Ignored,
    }
}

/// Extracts all submodules from `content`, in file order.
///
/// A `path` line sets the pending path and every later `url` line completes
/// an entry with it, until the next `path` replaces it. A `url` before any
/// `path` gives an entry with an empty path and line number 0.
#[must_use]
pub fn parse_manifest(content: &str) -> Vec<Submodule> {
    let mut submodules = Vec::new();
    let mut pending: Option<(usize, &str)> = None;

    for (index, line) in content.lines().enumerate() {
        match classify_line(line) {
            ManifestLine::Path(path) => pending = Some((index + 1, path)),
            ManifestLine::Url(url) => {
                let (line_number, path) = pending.unwrap_or((0, ""));
                submodules.push(Submodule {
                    line_number,
                    path: path.to_string(),
                    url: url.to_string(),
                });
            }
            ManifestLine::Ignored => {}
        }
    }

    submodules
}

/// Reads and parses the manifest at `path`.
///
/// A stem without a manifest has no submodules.
///
/// # Errors
///
/// Returns `StemError::ReadError` if the file exists but cannot be read.
pub fn read_manifest(path: &Path) -> RearchiveResult<Vec<Submodule>> {
    match super::read_text(path) {
        Ok(content) => Ok(parse_manifest(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StemError::read(path, e).into()),
    }
}
