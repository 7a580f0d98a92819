// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelfrs - command-line front end for the shelf bookmark mirror.
//!
//! Wires the reconciliation engine in `shelf-core` to Instapaper and to a
//! shelf root on disk.
//!
//! # Main Components
//!
//! - [`Config`] - `shelf.toml` loading, defaults and credential overrides
//! - [`instapaper`] - OAuth-signed API client and article downloader
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use shelfrs::{init_shelf, Config};
//!
//! init_shelf(Path::new("."))?;
//! let config = Config::load(Path::new("."))?;
//! let options = config.sync_options(Path::new("."), None)?;
//! ```

mod cli;
mod commands;
pub mod env;
pub mod logging;
pub mod timings;

pub mod config;
pub mod error;
pub mod instapaper;

pub use cli::{Cli, Command};
pub use config::{init_shelf, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Dispatches a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { root } => commands::init::run(&commands::shelf_root(root)?),
        Command::Sync {
            root,
            limit,
            dry_run,
        } => commands::sync::run(&commands::shelf_root(root)?, limit, dry_run),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "shelf", &mut std::io::stdout());
            Ok(())
        }
    }
}
