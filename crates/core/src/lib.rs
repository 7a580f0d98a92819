// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelf-core: reconciliation engine for the shelf bookmark mirror.
//!
//! Keeps a local tree of downloaded articles, organized one directory per
//! folder, in agreement with a remote bookmarking service. Each run performs a
//! three-way diff between the online placement, the local placement inferred
//! from the filesystem, and the index persisted by the previous run. Conflicts
//! resolve in favour of the remote side and nothing is ever uploaded.

pub mod apply;
pub mod diff;
pub mod error;
pub mod folders;
pub mod index;
pub mod local_tree;
pub mod model;
pub mod remote_tree;
pub mod service;
pub mod sync;

#[cfg(test)]
mod test_helpers;

pub use diff::{three_way_diff, Diff, Resolution};
pub use error::{Error, Result};
pub use folders::{FolderCatalog, FolderPlan, LocalFolder};
pub use index::IndexStore;
pub use local_tree::LocalTree;
pub use model::{AssignmentTree, Bookmark, BookmarkId, Folder, FolderId};
pub use remote_tree::RemoteTree;
pub use service::{BookmarkService, ContentFetcher, FetchError, RemoteError, RemoteResult};
pub use sync::{SyncOptions, SyncReport, Synchronizer};
