// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mirror Instapaper folders into a local library of articles")]
#[command(
    long_about = "Mirror Instapaper folders into a local library of articles.\n\n\
    Each run reconciles the remote folders, the local library and the index \
    left by the previous run. When both sides changed, Instapaper wins."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create shelf.toml and the library directory
    Init {
        /// Shelf root (defaults to the current directory)
        #[arg(short = 'C', long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Reconcile the library with Instapaper
    Sync {
        /// Shelf root (defaults to the current directory)
        #[arg(short = 'C', long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Bookmarks listed per folder (overrides shelf.toml, max 500)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show what would change without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
