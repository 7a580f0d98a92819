// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Folder catalog: brings local folder directories in line with remote folders.
//!
//! Each local folder is a top-level directory of the books root named
//! `<title with underscores>_<folder id>`. The trailing id is the only channel
//! through which a directory maps back to a remote folder. Folders that no
//! longer exist remotely are moved under `deleted/`, never erased.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::model::{Folder, FolderId, ID_SEPARATOR};
use crate::service::BookmarkService;

/// Name of the holding area for retired folders and files.
pub const DELETED_DIR: &str = "deleted";

/// A folder directory found under the books root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFolder {
    pub id: FolderId,
    pub title: String,
    pub path: PathBuf,
}

/// Folder changes needed to make the local side match the remote side.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderPlan {
    pub to_create: Vec<Folder>,
    pub to_retire: Vec<LocalFolder>,
}

impl FolderPlan {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_retire.is_empty()
    }
}

/// Recovers `(title, folder id)` from a directory name.
///
/// Returns `None` for names without a separator, with an empty id, or for the
/// reserved `deleted` holding area.
pub fn parse_directory_name(name: &str) -> Option<(String, FolderId)> {
    if name == DELETED_DIR {
        return None;
    }
    let (title, id) = name.rsplit_once(ID_SEPARATOR)?;
    if id.is_empty() {
        return None;
    }
    Some((title.replace(ID_SEPARATOR, " "), FolderId::new(id)))
}

/// Returns `path`, or the first `path.<n>` that does not exist yet.
pub(crate) fn unique_destination(path: PathBuf) -> PathBuf {
    if !path.exists() {
        return path;
    }
    let mut n = 1;
    loop {
        let mut name = path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        let candidate = PathBuf::from(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Enumerates and reconciles folders under a books root.
pub struct FolderCatalog {
    root: PathBuf,
}

impl FolderCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FolderCatalog { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory that receives retired folders and files.
    pub fn deleted_dir(&self) -> PathBuf {
        self.root.join(DELETED_DIR)
    }

    /// Lists remote folders plus the two pseudo-folders.
    pub fn remote_folders<S: BookmarkService + ?Sized>(service: &mut S) -> Result<Vec<Folder>> {
        let mut folders = service.list_folders()?;
        folders.retain(|f| !f.id.is_pseudo());
        folders.extend(Folder::pseudo_folders());
        Ok(folders)
    }

    /// Scans top-level directories whose name ends in `_<folder id>`.
    ///
    /// A missing root yields no folders. Results are sorted by path.
    pub fn scan(&self) -> Result<Vec<LocalFolder>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut folders = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                debug!("skipping non-utf8 directory {}", entry.path().display());
                continue;
            };
            match parse_directory_name(name) {
                Some((title, id)) => folders.push(LocalFolder {
                    id,
                    title,
                    path: entry.path(),
                }),
                None => debug!("skipping directory {}", name),
            }
        }
        folders.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(folders)
    }

    /// Computes `remote - local` (create) and `local - remote` (retire) by folder id.
    pub fn plan(remote: &[Folder], local: &[LocalFolder]) -> FolderPlan {
        let to_create = remote
            .iter()
            .filter(|r| !local.iter().any(|l| l.id == r.id))
            .cloned()
            .collect();
        let to_retire = local
            .iter()
            .filter(|l| !l.id.is_pseudo() && !remote.iter().any(|r| r.id == l.id))
            .cloned()
            .collect();
        FolderPlan {
            to_create,
            to_retire,
        }
    }

    /// Creates missing folder directories and moves retired ones under `deleted/`.
    pub fn apply(&self, plan: &FolderPlan) -> Result<()> {
        for folder in &plan.to_create {
            let path = self.root.join(folder.directory_name());
            info!("creating folder {}", path.display());
            fs::create_dir_all(&path)?;
        }

        if !plan.to_retire.is_empty() {
            fs::create_dir_all(self.deleted_dir())?;
        }
        for folder in &plan.to_retire {
            let Some(name) = folder.path.file_name() else {
                continue;
            };
            let destination = unique_destination(self.deleted_dir().join(name));
            info!(
                "retiring folder {} to {}",
                folder.path.display(),
                destination.display()
            );
            fs::rename(&folder.path, &destination)?;
        }
        Ok(())
    }

    /// Plans and applies the folder reconciliation, returning the plan.
    pub fn sync(&self, remote: &[Folder]) -> Result<FolderPlan> {
        fs::create_dir_all(&self.root)?;
        let local = self.scan()?;
        let plan = Self::plan(remote, &local);
        self.apply(&plan)?;
        Ok(plan)
    }
}

/// Finds the local folder with the given id.
pub fn find_folder<'a>(folders: &'a [LocalFolder], id: &FolderId) -> Option<&'a LocalFolder> {
    folders.iter().find(|f| &f.id == id)
}

#[cfg(test)]
#[path = "folders_tests.rs"]
mod tests;
