// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator traits for the remote bookmark service and the content fetcher.
//!
//! The synchronizer only talks to the outside world through these two seams:
//! - [`BookmarkService`] lists folders and bookmarks and mutates remote placement
//! - [`ContentFetcher`] turns a bookmark into a file inside a local folder
//!
//! Production implementations live in the CLI crate; tests use in-memory mocks.

use std::path::{Path, PathBuf};

use crate::model::{Bookmark, BookmarkId, Folder, FolderId};

/// Maximum page size accepted by the remote service for a bookmark listing.
pub const MAX_PAGE_LIMIT: usize = 500;

/// Error type for remote service calls.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with an error payload.
    #[error("service error {code}: {message}")]
    Api { code: u32, message: String },

    /// The response body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Authentication was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),
}

/// Result type for remote service calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// The remote bookmarking service.
///
/// All calls are blocking. Mutations take the bookmark value built during
/// remote tree construction.
pub trait BookmarkService {
    /// Lists the user-created folders. Pseudo-folders are not included.
    fn list_folders(&mut self) -> RemoteResult<Vec<Folder>>;

    /// Lists up to `limit` bookmarks in a folder (pseudo-folders included).
    fn list_bookmarks(&mut self, folder: &FolderId, limit: usize) -> RemoteResult<Vec<Bookmark>>;

    /// Moves a bookmark to the archive.
    fn archive(&mut self, bookmark: &Bookmark) -> RemoteResult<()>;

    /// Moves a bookmark back to unread.
    fn unarchive(&mut self, bookmark: &Bookmark) -> RemoteResult<()>;

    /// Moves a bookmark into a user-created folder.
    fn move_to(&mut self, bookmark: &Bookmark, folder: &FolderId) -> RemoteResult<()>;
}

/// Error type for content fetches. Fetch failures skip the bookmark.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The service returned no usable content for the bookmark.
    #[error("bookmark {0} has no content")]
    Empty(BookmarkId),

    /// The content could not be retrieved.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// The artifact could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces a locally persisted artifact for a bookmark.
pub trait ContentFetcher {
    /// Fetches the bookmark's content and stores it inside `destination`.
    ///
    /// The artifact's file stem must end in `_<bookmark id>` so the local
    /// tree builder can recover the id. Returns the artifact path.
    fn fetch_and_store(
        &mut self,
        bookmark: &Bookmark,
        destination: &Path,
    ) -> Result<PathBuf, FetchError>;
}
