// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test doubles for the remote service and the content fetcher.

#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Bookmark, BookmarkId, Folder, FolderId, ARCHIVE, UNREAD};
use crate::service::{BookmarkService, ContentFetcher, FetchError, RemoteError, RemoteResult};

/// A remote mutation recorded by [`MockService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Archive(BookmarkId),
    Unarchive(BookmarkId),
    Move(BookmarkId, FolderId),
}

/// In-memory bookmark service.
#[derive(Debug, Default)]
pub struct MockService {
    /// User-created folders (pseudo-folders are implicit).
    pub folders: Vec<Folder>,
    /// Current remote placement of every bookmark.
    pub placement: BTreeMap<BookmarkId, (Bookmark, FolderId)>,
    /// Mutations issued, in order.
    pub calls: Vec<Call>,
    /// When set, every mutation fails.
    pub fail_mutations: bool,
}

impl MockService {
    pub fn with_folders(folders: &[(&str, &str)]) -> Self {
        MockService {
            folders: folders
                .iter()
                .map(|(id, title)| Folder::new(FolderId::new(*id), *title))
                .collect(),
            ..Default::default()
        }
    }

    /// Places a bookmark in a folder, creating it if needed.
    pub fn put(&mut self, id: u64, folder: &str) {
        let bookmark = bookmark(id);
        self.placement
            .insert(bookmark.id, (bookmark, FolderId::new(folder)));
    }

    /// The folder a bookmark is currently in, if it exists remotely.
    pub fn folder_of(&self, id: u64) -> Option<&str> {
        self.placement
            .get(&BookmarkId(id))
            .map(|(_, folder)| folder.as_str())
    }

    fn relocate(&mut self, bookmark: &Bookmark, folder: FolderId) -> RemoteResult<()> {
        if self.fail_mutations {
            return Err(RemoteError::Request("mock failure".into()));
        }
        let known = folder.is_pseudo() || self.folders.iter().any(|f| f.id == folder);
        if !known {
            return Err(RemoteError::Api {
                code: 1242,
                message: format!("folder {folder} does not exist"),
            });
        }
        match self.placement.get_mut(&bookmark.id) {
            Some(entry) => {
                entry.1 = folder;
                Ok(())
            }
            None => Err(RemoteError::Api {
                code: 1241,
                message: format!("bookmark {} does not exist", bookmark.id),
            }),
        }
    }
}

impl BookmarkService for MockService {
    fn list_folders(&mut self) -> RemoteResult<Vec<Folder>> {
        Ok(self.folders.clone())
    }

    fn list_bookmarks(&mut self, folder: &FolderId, limit: usize) -> RemoteResult<Vec<Bookmark>> {
        Ok(self
            .placement
            .values()
            .filter(|(_, f)| f == folder)
            .map(|(b, _)| b.clone())
            .take(limit)
            .collect())
    }

    fn archive(&mut self, bookmark: &Bookmark) -> RemoteResult<()> {
        self.calls.push(Call::Archive(bookmark.id));
        self.relocate(bookmark, FolderId::new(ARCHIVE))
    }

    fn unarchive(&mut self, bookmark: &Bookmark) -> RemoteResult<()> {
        self.calls.push(Call::Unarchive(bookmark.id));
        self.relocate(bookmark, FolderId::new(UNREAD))
    }

    fn move_to(&mut self, bookmark: &Bookmark, folder: &FolderId) -> RemoteResult<()> {
        self.calls.push(Call::Move(bookmark.id, folder.clone()));
        self.relocate(bookmark, folder.clone())
    }
}

/// Fetcher writing a small fixture file named after the bookmark.
#[derive(Debug, Default)]
pub struct MockFetcher {
    /// Bookmarks fetched, in order.
    pub fetched: Vec<BookmarkId>,
    /// Bookmarks whose fetch fails with [`FetchError::Empty`].
    pub fail_for: BTreeSet<BookmarkId>,
}

impl ContentFetcher for MockFetcher {
    fn fetch_and_store(
        &mut self,
        bookmark: &Bookmark,
        destination: &Path,
    ) -> Result<PathBuf, FetchError> {
        if self.fail_for.contains(&bookmark.id) {
            return Err(FetchError::Empty(bookmark.id));
        }
        self.fetched.push(bookmark.id);
        let path = destination.join(format!("{}.epub", bookmark.file_stem));
        fs::write(&path, FIXTURE_CONTENT)?;
        Ok(path)
    }
}

pub const FIXTURE_CONTENT: &str = "test content";

/// The bookmark every fixture id maps to.
pub fn bookmark(id: u64) -> Bookmark {
    Bookmark::new(BookmarkId(id), format!("Test Bookmark {id}"), "http://example.com")
}

/// File name [`MockFetcher`] produces for a fixture bookmark.
pub fn fixture_file_name(id: u64) -> String {
    format!("{}.epub", bookmark(id).file_stem)
}

/// Creates an empty folder directory for `folder` under `root`.
pub fn make_folder_dir(root: &Path, id: &str, title: &str) -> PathBuf {
    let path = root.join(Folder::new(FolderId::new(id), title).directory_name());
    fs::create_dir_all(&path).unwrap();
    path
}
