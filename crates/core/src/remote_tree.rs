// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote assignment tree built from one capped listing per folder.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{AssignmentTree, Bookmark, BookmarkId, Folder};
use crate::service::{BookmarkService, MAX_PAGE_LIMIT};

/// Where every visible remote bookmark lives, plus the bookmark values
/// needed to issue remote mutations later.
#[derive(Debug, Default, Clone)]
pub struct RemoteTree {
    pub tree: AssignmentTree,
    pub bookmarks: BTreeMap<BookmarkId, Bookmark>,
}

impl RemoteTree {
    /// Lists each folder once with a page size of `limit` (capped at
    /// [`MAX_PAGE_LIMIT`]). Bookmarks beyond the cap are not visible.
    pub fn build<S: BookmarkService + ?Sized>(
        service: &mut S,
        folders: &[Folder],
        limit: usize,
    ) -> Result<Self> {
        let limit = limit.min(MAX_PAGE_LIMIT);
        let mut remote = RemoteTree::default();

        for folder in folders {
            let listed = service.list_bookmarks(&folder.id, limit)?;
            debug!("folder {} lists {} bookmarks", folder.id, listed.len());
            if listed.len() >= limit {
                warn!(
                    "folder {} reached the listing cap of {}; older bookmarks are not synced",
                    folder.id, limit
                );
            }
            for bookmark in listed {
                remote.tree.insert(bookmark.id, folder.id.clone());
                remote.bookmarks.insert(bookmark.id, bookmark);
            }
        }

        Ok(remote)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[cfg(test)]
#[path = "remote_tree_tests.rs"]
mod tests;
