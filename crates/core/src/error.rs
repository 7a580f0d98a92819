// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for shelf-core operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{BookmarkId, FolderId};
use crate::service::RemoteError;

/// All possible errors that can abort a synchronization run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "inconsistent state for bookmark {bookmark} (online: {online}, local: {local}, index: {index})"
    )]
    InconsistentState {
        bookmark: BookmarkId,
        online: String,
        local: String,
        index: String,
    },

    #[error("folder with id {folder} not found\n  hint: run the folder sync before applying diffs")]
    FolderNotFound { folder: FolderId },

    #[error("bookmark {bookmark} is not known to the remote service\n  hint: uploading local bookmarks is not supported")]
    UploadUnsupported { bookmark: BookmarkId },

    #[error("bookmark {bookmark} has no remote record to download from")]
    MissingBookmark { bookmark: BookmarkId },

    #[error("file name does not end in a bookmark id: {}\n  hint: local files must be named <title>_<bookmark id>.<ext>", path.display())]
    InvalidFileName { path: PathBuf },

    #[error("corrupted index: {0}")]
    CorruptedIndex(String),

    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for shelf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
