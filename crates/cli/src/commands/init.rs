// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::config::{init_shelf, Config};
use crate::error::Result;

pub fn run(root: &Path) -> Result<()> {
    let config_path = init_shelf(root)?;
    let books = Config::default().books_path(root);

    println!("Initialized shelf at {}", root.display());
    println!("  library: {}", books.display());
    println!(
        "Add your Instapaper credentials to {} before running 'shelf sync'",
        config_path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
