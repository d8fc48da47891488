// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository declarations of a stem ("flying start" file).
//!
//! ```text
//! { "share000", "c623d50ade32453f9c5c1808d47ade11" ,   accepted
//! { "share000" , "c623d50a..." }                       ignored (3rd sep)
//! // anything else                                     ignored
//! ```
//!
//! The file is usually C++ source with the declarations embedded in an
//! initializer list, so everything that does not match is skipped silently.

use std::path::Path;

use tracing::trace;

use super::Repository;
use super::scanner::LineScanner;
use crate::error::{RearchiveResult, StemError};

/// Classifies one declaration line.
///
/// Returns the repository if the line reads `{ "local", "remote" ,`, with
/// anything after the third separator ignored.
#[must_use]
pub fn parse_line(line: &str) -> Option<Repository> {
    let mut scanner = LineScanner::new(line);
    let open = scanner.next_char()?;
    let local = scanner.next_quoted()?;
    let middle = scanner.next_char()?;
    let remote = scanner.next_quoted()?;
    let close = scanner.next_char()?;

    (open == '{' && middle == ',' && close == ',').then_some(Repository { local, remote })
}

/// Extracts all declared repositories from `content`, in line order.
#[must_use]
pub fn parse_declarations(content: &str) -> Vec<Repository> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let repository = parse_line(line);
            if repository.is_none() && !line.trim().is_empty() {
                trace!(line = index + 1, "declaration line ignored");
            }
            repository
        })
        .collect()
}

/// Reads and parses the declaration file at `path`.
///
/// # Errors
///
/// Returns `StemError::ReadError` if the file cannot be read.
pub fn read_declarations(path: &Path) -> RearchiveResult<Vec<Repository>> {
    let content = super::read_text(path).map_err(|e| StemError::read(path, e))?;
    Ok(parse_declarations(&content))
}
