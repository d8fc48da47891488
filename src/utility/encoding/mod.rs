// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of input files saved by Windows editors.
//!
//! ```text
//! raw bytes --(sniff)--> Encoding --(decode)--> UTF-8
//!   EF BB BF       Utf8 (BOM stripped)
//!   FF FE          Utf16Le (BOM stripped)
//!   valid UTF-8    Utf8
//!   otherwise      Acp (Windows-1252)
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16_LE_BOM: &[u8] = b"\xFF\xFE";

/// Encodings recognised in declaration and manifest files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (code page 65001)
    #[default]
    Utf8,
    /// UTF-16 Little Endian (code page 1200), only detected with a BOM
    Utf16Le,
    /// Active Code Page - typically Windows-1252
    Acp,
}

/// Converts bytes from the given encoding to UTF-8.
///
/// Invalid sequences are replaced with U+FFFD (replacement character).
///
/// # Example
/// ```
/// use rearchive::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9"; // "café" in Windows-1252
/// let utf8 = bytes_to_utf8(Encoding::Acp, cp1252_bytes);
/// assert_eq!(utf8, "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Utf16Le => utf16_le_to_utf8(bytes),
        Encoding::Acp => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Guesses the encoding of `bytes` and returns the payload without its BOM.
#[must_use]
pub fn sniff(bytes: &[u8]) -> (Encoding, &[u8]) {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        (Encoding::Utf8, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        (Encoding::Utf16Le, rest)
    } else if std::str::from_utf8(bytes).is_ok() {
        (Encoding::Utf8, bytes)
    } else {
        (Encoding::Acp, bytes)
    }
}

/// Decodes a whole text file to UTF-8, detecting its encoding first.
///
/// # Example
/// ```
/// use rearchive::utility::encoding::decode_text;
///
/// assert_eq!(decode_text(b"\xEF\xBB\xBFpath = a"), "path = a");
/// assert_eq!(decode_text(b"caf\xe9"), "café");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (encoding, payload) = sniff(bytes);
    bytes_to_utf8(encoding, payload)
}

/// Converts UTF-16 LE bytes to UTF-8.
fn utf16_le_to_utf8(bytes: &[u8]) -> Cow<'static, str> {
    // Handle odd byte count by ignoring the last byte
    let len = bytes.len() & !1;
    if len == 0 {
        return Cow::Borrowed("");
    }

    let u16_slice: Vec<u16> = bytes[..len]
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    Cow::Owned(String::from_utf16_lossy(&u16_slice))
}
