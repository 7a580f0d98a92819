// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod sync;

use std::path::PathBuf;

use crate::error::Result;

/// Resolves the shelf root: the given directory, or the current one.
pub fn shelf_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}
