// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse() --> Config --> Logging --> run_rearchive_command --> "Ready"
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use rearchive::cli::{self, Cli};
use rearchive::cmd::rearchive::{RearchiveArgs, run_rearchive_command};
use rearchive::config::loader::ConfigLoader;
use rearchive::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use rearchive::error::argument_error;
use rearchive::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let message = e.render().to_string();
            let message = message.trim_end().trim_start_matches("error: ");
            eprintln!("Error: {}", argument_error(message));
            return ExitCode::FAILURE;
        }
    };

    let (config, loaded_files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    run(&cli, &config, &loaded_files)
}

fn run(cli: &Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    for line in loaded_files {
        tracing::debug!("config file {line}");
    }

    let args = RearchiveArgs {
        mode: cli.mode,
        root: cli.global.root.clone(),
        output: cli.global.output.clone(),
        dry: cli.global.dry,
    };

    match run_rearchive_command(&args, config) {
        Ok(_) => {
            println!("Ready");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> rearchive::error::Result<(Config, Vec<String>)> {
    let loader = ConfigLoader::new()
        .add_toml_file_optional(DEFAULT_CONFIG_FILE)
        .with_env_prefix(ENV_PREFIX);
    let loader = cli.global.apply_to(loader)?;
    let loaded_files = loader.format_loaded_files();
    Ok((loader.build()?, loaded_files))
}
