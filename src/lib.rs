// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!             usb | github          rearchive
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              | TOML, env, layered values |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               stem      identifier  script
//!          declarations   url -> id   6 templates
//!          manifest, scan              one renderer
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod script;
pub mod stem;
pub mod utility;
