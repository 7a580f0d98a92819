// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronizer: runs one complete reconciliation pass.
//!
//! Order of operations:
//! 1. Folder reconciliation (create missing, retire stale)
//! 2. Build the online and local trees
//! 3. Load the index (empty if missing)
//! 4. Three-way diff
//! 5. Apply the local diff, then the remote diff
//! 6. Re-scan the local tree and persist it as the new index
//!
//! The index is written last and always from a fresh scan, so anything left
//! unapplied by a failure simply shows up again as a diff on the next run.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::apply::{apply_remote, LocalApplier, LocalApplyReport, RemoteApplyReport};
use crate::diff::{three_way_diff, Diff};
use crate::error::Result;
use crate::folders::{FolderCatalog, FolderPlan, LocalFolder};
use crate::index::IndexStore;
use crate::local_tree::LocalTree;
use crate::model::Folder;
use crate::remote_tree::RemoteTree;
use crate::service::{BookmarkService, ContentFetcher};

/// Default number of bookmarks listed per folder.
pub const DEFAULT_LIMIT: usize = 100;

/// Default pause after each content fetch.
pub const DEFAULT_FETCH_PAUSE: Duration = Duration::from_secs(1);

/// Where the synchronizer reads and writes, and how hard it hits the service.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Root directory holding one directory per folder.
    pub books_dir: PathBuf,
    /// Path of the persisted index file.
    pub index_path: PathBuf,
    /// Page size for each folder listing.
    pub limit: usize,
    /// Pause inserted after every content fetch.
    pub fetch_pause: Duration,
}

impl SyncOptions {
    pub fn new(books_dir: impl Into<PathBuf>, index_path: impl Into<PathBuf>) -> Self {
        SyncOptions {
            books_dir: books_dir.into(),
            index_path: index_path.into(),
            limit: DEFAULT_LIMIT,
            fetch_pause: DEFAULT_FETCH_PAUSE,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_fetch_pause(mut self, pause: Duration) -> Self {
        self.fetch_pause = pause;
        self
    }
}

/// Outcome of a run (or of a dry run, where nothing was applied).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub folders: FolderPlan,
    pub online_count: usize,
    pub local_count: usize,
    pub diff: Diff,
    pub local: LocalApplyReport,
    pub remote: RemoteApplyReport,
    /// Entries in the persisted index after the run.
    pub indexed: usize,
    pub dry_run: bool,
}

/// Trees captured at the start of a run.
struct Snapshot {
    remote: RemoteTree,
    local: LocalTree,
    diff: Diff,
}

/// Orchestrates a sync between a bookmark service and the local books tree.
pub struct Synchronizer<S, F> {
    service: S,
    fetcher: F,
    options: SyncOptions,
}

impl<S: BookmarkService, F: ContentFetcher> Synchronizer<S, F> {
    pub fn new(service: S, fetcher: F, options: SyncOptions) -> Self {
        Synchronizer {
            service,
            fetcher,
            options,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    fn catalog(&self) -> FolderCatalog {
        FolderCatalog::new(&self.options.books_dir)
    }

    fn index(&self) -> IndexStore {
        IndexStore::new(&self.options.index_path)
    }

    /// Runs a full sync pass and persists the new index.
    pub fn run(&mut self) -> Result<SyncReport> {
        let catalog = self.catalog();

        info!("synchronizing folders");
        let remote_folders = FolderCatalog::remote_folders(&mut self.service)?;
        let folders = catalog.sync(&remote_folders)?;
        let local_folders = catalog.scan()?;

        let snapshot = self.snapshot(&remote_folders, &local_folders)?;

        info!("applying diffs");
        let local = LocalApplier::new(&local_folders, catalog.deleted_dir())
            .with_fetch_pause(self.options.fetch_pause)
            .apply(
                &snapshot.diff.local,
                &snapshot.local,
                &snapshot.remote,
                &mut self.fetcher,
            )?;
        let remote = apply_remote(&mut self.service, &snapshot.diff.remote, &snapshot.remote)?;

        info!("storing index");
        let resulting = LocalTree::build(&catalog.scan()?)?;
        self.index().save(&resulting.tree)?;

        Ok(SyncReport {
            folders,
            online_count: snapshot.remote.len(),
            local_count: snapshot.local.len(),
            diff: snapshot.diff,
            local,
            remote,
            indexed: resulting.len(),
            dry_run: false,
        })
    }

    /// Computes what a run would do without touching disk or the service's state.
    pub fn plan(&mut self) -> Result<SyncReport> {
        let catalog = self.catalog();
        let remote_folders = FolderCatalog::remote_folders(&mut self.service)?;
        let local_folders = catalog.scan()?;
        let folders = FolderCatalog::plan(&remote_folders, &local_folders);

        let snapshot = self.snapshot(&remote_folders, &local_folders)?;
        let indexed = self.index().load()?.len();

        Ok(SyncReport {
            folders,
            online_count: snapshot.remote.len(),
            local_count: snapshot.local.len(),
            diff: snapshot.diff,
            indexed,
            dry_run: true,
            ..Default::default()
        })
    }

    fn snapshot(
        &mut self,
        remote_folders: &[Folder],
        local_folders: &[LocalFolder],
    ) -> Result<Snapshot> {
        info!("building trees");
        let remote = RemoteTree::build(&mut self.service, remote_folders, self.options.limit)?;
        let local = LocalTree::build(local_folders)?;
        let index = self.index().load()?;
        info!("discovered {} online bookmarks", remote.len());
        info!("discovered {} local bookmarks", local.len());

        let diff = three_way_diff(&remote.tree, &local.tree, &index)?;
        info!("online changes: {}", diff.remote.len());
        info!("local changes: {}", diff.local.len());

        Ok(Snapshot {
            remote,
            local,
            diff,
        })
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
