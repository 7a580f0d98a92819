// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted index: the local assignment tree as of the last successful run.
//!
//! Stored as a single JSON object mapping string bookmark ids to folder ids,
//! e.g. `{"1234": "unread", "5678": "42"}`. A missing file is an empty index.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{AssignmentTree, BookmarkId, FolderId};

/// Reads and writes the index file.
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        IndexStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the index, or an empty tree if the file does not exist.
    pub fn load(&self) -> Result<AssignmentTree> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AssignmentTree::new()),
            Err(e) => return Err(e.into()),
        };

        let raw: BTreeMap<String, String> = serde_json::from_str(&content)?;
        raw.into_iter()
            .map(|(key, folder)| {
                let id: BookmarkId = key
                    .parse()
                    .map_err(|_| Error::CorruptedIndex(format!("invalid bookmark id '{key}'")))?;
                Ok((id, FolderId::new(folder)))
            })
            .collect()
    }

    /// Replaces the index with `tree`.
    ///
    /// Writes a sibling temporary file, fsyncs it and renames it over the index.
    pub fn save(&self, tree: &AssignmentTree) -> Result<()> {
        let raw: BTreeMap<String, &str> = tree
            .iter()
            .map(|(id, folder)| (id.to_string(), folder.as_str()))
            .collect();
        let json = serde_json::to_string_pretty(&raw)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let mut file = File::create(&tmp_path)?;
        writeln!(file, "{json}")?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
