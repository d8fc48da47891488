// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{IDENTIFIER_LEN, derive_identifier};
use crate::error::RearchiveError;

const ID: &str = "deadbeefdeadbeefdeadbeefdeadbeef";

#[test]
fn test_trailing_slash_is_skipped() {
    let url = format!("https://host/x/{ID}/");
    assert_eq!(derive_identifier(&url).unwrap(), ID);
}

#[test]
fn test_trailing_backslash_is_skipped() {
    let url = format!("\\\\server\\share\\{ID}\\");
    assert_eq!(derive_identifier(&url).unwrap(), ID);
}

#[test]
fn test_without_separator_takes_suffix() {
    let url = format!("https://host/x/{ID}");
    assert_eq!(derive_identifier(&url).unwrap(), ID);
    assert_eq!(derive_identifier(&format!("{ID}.git")).unwrap(), format!("{}.git", &ID[4..]));
}

#[test]
fn test_short_urls_are_clamped() {
    assert_eq!(derive_identifier("abc").unwrap(), "abc");
    assert_eq!(derive_identifier("abc/").unwrap(), "abc");
    assert_eq!(derive_identifier("/").unwrap(), "");
    assert_eq!(derive_identifier(ID).unwrap(), ID);
    assert_eq!(derive_identifier(&format!("{ID}/")).unwrap(), ID);
}

#[test]
fn test_empty_url_is_invalid_input() {
    let err = derive_identifier("").unwrap_err();
    assert!(matches!(err, RearchiveError::InvalidInput(_)));
}

#[test]
fn test_counts_characters_not_bytes() {
    let url = format!("https://høst/ø{ID}/");
    let id = derive_identifier(&url).unwrap();
    assert_eq!(id, ID);

    let wide = "é".repeat(40);
    assert_eq!(derive_identifier(&wide).unwrap().chars().count(), IDENTIFIER_LEN);
}

#[test]
fn test_length_never_exceeds_window() {
    let mut url = String::new();
    for i in 0..80 {
        url.push(char::from(b'a' + (i % 26)));
        for candidate in [url.clone(), format!("{url}/"), format!("{url}\\")] {
            let id = derive_identifier(&candidate).unwrap();
            assert!(id.chars().count() <= IDENTIFIER_LEN, "{candidate}");
            let body = candidate.trim_end_matches(['/', '\\']);
            assert!(body.ends_with(&id), "{candidate} -> {id}");
        }
    }
}
