// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local assignment tree inferred from where article files live.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::folders::LocalFolder;
use crate::model::{AssignmentTree, BookmarkId, ID_SEPARATOR};

/// Where every local article lives, plus the absolute path of each file.
#[derive(Debug, Default, Clone)]
pub struct LocalTree {
    pub tree: AssignmentTree,
    pub paths: BTreeMap<BookmarkId, PathBuf>,
}

/// Extracts the bookmark id from the integer suffix of a file stem.
///
/// Fails with [`Error::InvalidFileName`] when the stem has no `_<digits>` suffix.
pub fn bookmark_id_from_path(path: &Path) -> Result<BookmarkId> {
    let invalid = || Error::InvalidFileName {
        path: path.to_path_buf(),
    };
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
    let suffix = match stem.rsplit_once(ID_SEPARATOR) {
        Some((_, suffix)) => suffix,
        None => stem,
    };
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    suffix.parse().map_err(|_| invalid())
}

impl LocalTree {
    /// Walks every folder directory and records each file's bookmark id.
    ///
    /// Subdirectories inside a folder are ignored. A file without a valid id
    /// suffix aborts the build.
    pub fn build(folders: &[LocalFolder]) -> Result<Self> {
        let mut local = LocalTree::default();

        for folder in folders {
            for entry in fs::read_dir(&folder.path)? {
                let entry = entry?;
                if !entry.file_type()?.is_file() {
                    debug!("skipping {}", entry.path().display());
                    continue;
                }
                let path = std::path::absolute(entry.path())?;
                let id = bookmark_id_from_path(&path)?;
                local.tree.insert(id, folder.id.clone());
                local.paths.insert(id, path);
            }
        }

        Ok(local)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[cfg(test)]
#[path = "local_tree_tests.rs"]
mod tests;
