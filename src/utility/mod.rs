// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()   UTF-8 (BOM) / UTF-16 LE (BOM) / CP1252 --> UTF-8
//! fs
//!   walk:  list_subdirectories(), WalkOptions
//!   write: write_atomic()
//! ```

pub mod encoding;
pub mod fs;
