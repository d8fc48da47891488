// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote identifiers recovered from submodule URLs.
//!
//! ```text
//! https://host/x/deadbeefdeadbeefdeadbeefdeadbeef/
//!                ^------------ 32 -------------^ ^ trailing separator skipped
//! https://host/x/deadbeefdeadbeefdeadbeefdeadbeef
//!                ^------------ 32 -------------^
//! ```
//!
//! Windows are counted in characters and clamped at the start of the URL, so
//! a short URL gives a shorter identifier.

use crate::error::{RearchiveResult, invalid_input};

/// Length of a remote identifier.
pub const IDENTIFIER_LEN: usize = 32;

/// Derives the remote identifier from a submodule URL.
///
/// # Errors
///
/// Returns `RearchiveError::InvalidInput` if `url` is empty.
///
/// # Example
/// ```
/// use rearchive::identifier::derive_identifier;
///
/// let id = derive_identifier("https://host/x/0123456789abcdef0123456789abcdef/")?;
/// assert_eq!(id, "0123456789abcdef0123456789abcdef");
/// # Ok::<(), rearchive::error::RearchiveError>(())
/// ```
pub fn derive_identifier(url: &str) -> RearchiveResult<String> {
    let chars: Vec<char> = url.chars().collect();
    let Some(&last) = chars.last() else {
        return Err(invalid_input("cannot derive an identifier from an empty url"));
    };

    let end = if is_separator(last) {
        chars.len() - 1
    } else {
        chars.len()
    };
    let start = end.saturating_sub(IDENTIFIER_LEN);

    Ok(chars[start..end].iter().collect())
}

const fn is_separator(c: char) -> bool {
    matches!(c, '/' | '\\')
}

#[cfg(test)]
mod tests;
