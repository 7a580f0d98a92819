// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diff application against the local books tree and the remote service.
//!
//! Local rules:
//! - Target folder, bookmark not on disk: fetch it into the folder
//! - Target folder, bookmark on disk: move the file, keeping its name
//! - Target absent: retire the file under `deleted/<folder dir>/`
//!
//! Remote rules:
//! - `unread` target: unarchive; `archive` target: archive; other: move
//! - Bookmark unknown remotely: refused, uploading is not supported
//! - Target absent (deleted locally): skipped, remote deletions are not issued

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::folders::{find_folder, unique_destination, LocalFolder};
use crate::local_tree::LocalTree;
use crate::model::{BookmarkId, FolderId, ARCHIVE, UNREAD};
use crate::remote_tree::RemoteTree;
use crate::service::{BookmarkService, ContentFetcher};

/// Per-bookmark target placements, `None` meaning absent.
pub type Targets = BTreeMap<BookmarkId, Option<FolderId>>;

/// Counts of what the local applier did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocalApplyReport {
    pub fetched: usize,
    pub fetch_failed: usize,
    pub moved: usize,
    pub retired: usize,
}

/// Applies a local diff to the folder directories.
pub struct LocalApplier<'a> {
    folders: &'a [LocalFolder],
    deleted_dir: PathBuf,
    fetch_pause: Duration,
}

impl<'a> LocalApplier<'a> {
    /// `folders` must already contain every folder a target can name.
    pub fn new(folders: &'a [LocalFolder], deleted_dir: impl Into<PathBuf>) -> Self {
        LocalApplier {
            folders,
            deleted_dir: deleted_dir.into(),
            fetch_pause: Duration::ZERO,
        }
    }

    /// Pause inserted after every fetch to avoid hammering the service.
    pub fn with_fetch_pause(mut self, pause: Duration) -> Self {
        self.fetch_pause = pause;
        self
    }

    pub fn apply<F: ContentFetcher + ?Sized>(
        &self,
        targets: &Targets,
        local: &LocalTree,
        remote: &RemoteTree,
        fetcher: &mut F,
    ) -> Result<LocalApplyReport> {
        let mut report = LocalApplyReport::default();

        for (id, target) in targets {
            match target {
                Some(folder_id) => {
                    let folder = find_folder(self.folders, folder_id).ok_or_else(|| {
                        Error::FolderNotFound {
                            folder: folder_id.clone(),
                        }
                    })?;
                    match local.paths.get(id) {
                        Some(path) => {
                            relocate(path, &folder.path)?;
                            report.moved += 1;
                        }
                        None => {
                            let bookmark = remote
                                .bookmarks
                                .get(id)
                                .ok_or(Error::MissingBookmark { bookmark: *id })?;
                            info!("downloading {} into {}", bookmark.title, folder.id);
                            match fetcher.fetch_and_store(bookmark, &folder.path) {
                                Ok(path) => {
                                    debug!("stored {}", path.display());
                                    report.fetched += 1;
                                }
                                Err(e) => {
                                    warn!("skipping bookmark {}: {}", id, e);
                                    report.fetch_failed += 1;
                                }
                            }
                            if !self.fetch_pause.is_zero() {
                                std::thread::sleep(self.fetch_pause);
                            }
                        }
                    }
                }
                None => {
                    if let Some(path) = local.paths.get(id) {
                        self.retire(path)?;
                        report.retired += 1;
                    }
                }
            }
        }

        Ok(report)
    }

    /// Moves a file under `deleted/<folder dir>/`, never overwriting.
    fn retire(&self, path: &Path) -> Result<()> {
        let folder_dir = path
            .parent()
            .and_then(Path::file_name)
            .map(PathBuf::from)
            .unwrap_or_default();
        let Some(file_name) = path.file_name() else {
            return Ok(());
        };
        let dir = self.deleted_dir.join(folder_dir);
        fs::create_dir_all(&dir)?;
        let destination = unique_destination(dir.join(file_name));
        info!("retiring {} to {}", path.display(), destination.display());
        fs::rename(path, destination)?;
        Ok(())
    }
}

/// Moves a file into `folder`, keeping its file name.
fn relocate(path: &Path, folder: &Path) -> Result<()> {
    let Some(file_name) = path.file_name() else {
        return Ok(());
    };
    let destination = folder.join(file_name);
    if destination == path {
        return Ok(());
    }
    info!("moving {} to {}", path.display(), folder.display());
    fs::rename(path, destination)?;
    Ok(())
}

/// Counts of what the remote applier did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemoteApplyReport {
    pub archived: usize,
    pub unarchived: usize,
    pub moved: usize,
    pub skipped: usize,
}

/// Applies a remote diff through the bookmark service.
pub fn apply_remote<S: BookmarkService + ?Sized>(
    service: &mut S,
    targets: &Targets,
    remote: &RemoteTree,
) -> Result<RemoteApplyReport> {
    let mut report = RemoteApplyReport::default();

    for (id, target) in targets {
        let bookmark = remote
            .bookmarks
            .get(id)
            .ok_or(Error::UploadUnsupported { bookmark: *id })?;
        let Some(folder) = target else {
            // TODO: issue remote deletes once local file operations can be rolled back
            warn!("bookmark {} was deleted locally; remote copy left untouched", id);
            report.skipped += 1;
            continue;
        };

        info!("remote: moving {} to {}", bookmark.title, folder);
        match folder.as_str() {
            UNREAD => {
                service.unarchive(bookmark)?;
                report.unarchived += 1;
            }
            ARCHIVE => {
                service.archive(bookmark)?;
                report.archived += 1;
            }
            _ => {
                service.move_to(bookmark, folder)?;
                report.moved += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
