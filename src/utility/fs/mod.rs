// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:   list_subdirectories()  ignore::WalkBuilder, one level, sorted
//!         WalkOptions            max_depth, hidden, gitignore, links
//! write:  write_atomic()         tempfile + persist, executable bit
//! ```

pub mod walk;
pub mod write;
