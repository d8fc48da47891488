// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Script generation command.
//!
//! ```text
//! discover_stems(root) --> render_all(mode.scripts()) --> write_atomic(output/*.sh)
//!                                                   \--> debug log (--dry)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::Mode;
use crate::config::Config;
use crate::error::Result;
use crate::script::{Script, render_all};
use crate::stem::discovery::discover_stems;
use crate::utility::fs::write::write_atomic;

/// Where the scripts come from and where they go.
#[derive(Debug, Clone)]
pub struct RearchiveArgs {
    pub mode: Mode,
    pub root: PathBuf,
    pub output: PathBuf,
    pub dry: bool,
}

/// Main handler: discovers the stems under `args.root` and writes the
/// scripts of `args.mode` into `args.output`.
///
/// Returns the paths written, or the paths that would have been written
/// with `dry` set.
///
/// # Errors
///
/// Returns an error if discovery, rendering or writing fails. Nothing is
/// written when discovery or any render fails.
pub fn run_rearchive_command(args: &RearchiveArgs, config: &Config) -> Result<Vec<PathBuf>> {
    for line in config.format_options() {
        debug!("{line}");
    }

    let stems = discover_stems(&args.root, &config.discovery)?;
    info!(
        root = %args.root.display(),
        count = stems.len(),
        "discovered stems"
    );

    let scripts = render_all(args.mode.scripts(), &stems, config)?;

    if args.dry {
        for script in &scripts {
            debug!(file = script.file_name(), "dry run:\n{}", script.text());
        }
        return Ok(script_paths(&args.output, &scripts));
    }

    write_scripts(&args.output, &scripts)
}

/// Writes every script into `dir`, marked executable.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or a script
/// cannot be written.
pub fn write_scripts(dir: &Path, scripts: &[Script]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let paths = script_paths(dir, scripts);
    for (script, path) in scripts.iter().zip(&paths) {
        write_atomic(path, script.text(), true)?;
        info!(path = %path.display(), "wrote script");
    }
    Ok(paths)
}

fn script_paths(dir: &Path, scripts: &[Script]) -> Vec<PathBuf> {
    scripts
        .iter()
        .map(|script| dir.join(script.file_name()))
        .collect()
}
