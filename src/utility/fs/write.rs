// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to `path` through a temporary file in the same directory.
///
/// Readers never observe a half-written file: the temporary file is renamed
/// over `path` only after all bytes have been flushed. With `executable` set
/// the file gets mode `0o755` on Unix.
///
/// # Errors
///
/// Returns `FsError::IoError` if the temporary file cannot be created, written
/// or persisted.
///
/// # Example
/// ```no_run
/// use rearchive::utility::fs::write::write_atomic;
/// use std::path::Path;
///
/// write_atomic(Path::new("delete_git.sh"), "rm -rf stem/.git\n", true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_atomic(path: &Path, contents: &str, executable: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| FsError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| FsError::io(file.path(), e))?;

    if executable {
        set_executable(file.as_file()).map_err(|e| FsError::io(path, e))?;
    }

    file.persist(path)
        .map_err(|e| FsError::io(path, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_executable(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn set_executable(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}
