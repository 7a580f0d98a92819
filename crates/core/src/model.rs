// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data types shared by every stage of a sync run.
//!
//! A bookmark is identified by a [`BookmarkId`] on both sides; where it lives is
//! a [`FolderId`]. An [`AssignmentTree`] maps one to the other and exists in
//! three flavours per run (online, local and the persisted index).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Reserved id of the pseudo-folder holding unread bookmarks.
pub const UNREAD: &str = "unread";
/// Reserved id of the pseudo-folder holding archived bookmarks.
pub const ARCHIVE: &str = "archive";

/// Separator between a title and the trailing id in directory and file names.
pub const ID_SEPARATOR: char = '_';

/// Stable identifier issued by the remote service for a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(pub u64);

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(BookmarkId)
    }
}

/// Identifier of a folder: a remote numeric id as a string, or one of the
/// pseudo-folders [`UNREAD`] and [`ARCHIVE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    pub fn new(id: impl Into<String>) -> Self {
        FolderId(id.into())
    }

    pub fn unread() -> Self {
        FolderId(UNREAD.to_string())
    }

    pub fn archive() -> Self {
        FolderId(ARCHIVE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `unread` and `archive`, which always exist on both sides.
    pub fn is_pseudo(&self) -> bool {
        self.0 == UNREAD || self.0 == ARCHIVE
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A folder as listed by the remote service (or synthesized for pseudo-folders).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub title: String,
}

impl Folder {
    pub fn new(id: FolderId, title: impl Into<String>) -> Self {
        Folder {
            id,
            title: title.into(),
        }
    }

    /// The two pseudo-folders every account has.
    pub fn pseudo_folders() -> [Folder; 2] {
        [
            Folder::new(FolderId::unread(), UNREAD),
            Folder::new(FolderId::archive(), ARCHIVE),
        ]
    }

    /// Local directory name: the [`safe_file_name`] of the title, then `_<id>`.
    ///
    /// Falls back to `folder_<id>` when nothing of the title survives.
    pub fn directory_name(&self) -> String {
        let safe = safe_file_name(&self.title);
        let stem = if safe.is_empty() { "folder" } else { safe.as_str() };
        format!("{}{}{}", stem, ID_SEPARATOR, self.id)
    }
}

/// A remote bookmark with its derived naming fields computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    /// File name stem for the local artifact; always ends in `_<id>`.
    pub file_stem: String,
}

impl Bookmark {
    pub fn new(id: BookmarkId, title: impl Into<String>, url: impl Into<String>) -> Self {
        let title = title.into();
        let safe = safe_file_name(&title);
        let file_stem = if safe.is_empty() {
            format!("bookmark{}{}", ID_SEPARATOR, id)
        } else {
            format!("{}{}{}", safe, ID_SEPARATOR, id)
        };
        Bookmark {
            id,
            title,
            url: url.into(),
            file_stem,
        }
    }
}

/// Reduces a title to filename-safe characters and replaces spaces with underscores.
pub fn safe_file_name(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '(' | ')' | ' '))
        .collect::<String>()
        .replace(' ', "_")
}

/// Where each bookmark lives in one domain. Absence of a key means the
/// bookmark does not exist there.
pub type AssignmentTree = BTreeMap<BookmarkId, FolderId>;

/// Renders an optional tree slot for messages, using `absent` for a missing key.
pub fn slot_label(slot: Option<&FolderId>) -> String {
    match slot {
        Some(folder) => folder.to_string(),
        None => "absent".to_string(),
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
