// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use shelfrs::Cli;

fn main() {
    let cli = Cli::parse();
    shelfrs::logging::init();
    if let Err(e) = shelfrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
