// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Three-way diff between the online tree, the local tree and the index.
//!
//! Each bookmark known to any of the three trees is classified by its triple
//! `(online, local, index)`, where a missing key is the distinct value
//! "absent":
//!
//! | online vs index | local vs index | outcome                          |
//! |-----------------|----------------|----------------------------------|
//! | equal           | equal          | nothing to do                    |
//! | differs         | equal          | local follows online             |
//! | equal           | differs        | remote follows local             |
//! | differs         | differs (≠)    | conflict, online wins locally    |
//! | differs         | differs (=)    | converged, nothing to do         |
//!
//! A bookmark present only locally and never indexed is never pushed, since
//! uploading is not supported. Any other triple is an invariant violation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{slot_label, AssignmentTree, BookmarkId, FolderId};

/// How a single bookmark's triple is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// All three agree.
    Unchanged,
    /// Only the online side moved; the local copy follows.
    PullRemote,
    /// Only the local side moved; the remote copy follows.
    PushLocal,
    /// Both moved to different places; online wins.
    RemoteWins,
    /// Both moved to the same place.
    Converged,
    /// Present only locally and never indexed; nothing is uploaded.
    LocalOnly,
}

/// Classifies a triple, or returns `None` for a state outside the closed cases.
pub fn classify(
    online: Option<&FolderId>,
    local: Option<&FolderId>,
    index: Option<&FolderId>,
) -> Option<Resolution> {
    let online_same = online == index;
    let local_same = local == index;
    let agree = online == local;

    match (online_same, local_same, agree) {
        (true, true, true) => Some(Resolution::Unchanged),
        (false, true, false) => Some(Resolution::PullRemote),
        (true, false, false) if online.is_none() => Some(Resolution::LocalOnly),
        (true, false, false) => Some(Resolution::PushLocal),
        (false, false, false) => Some(Resolution::RemoteWins),
        (false, false, true) => Some(Resolution::Converged),
        _ => None,
    }
}

/// Target placements to apply. `None` means the bookmark must end up absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diff {
    /// Where each local copy must end up.
    pub local: BTreeMap<BookmarkId, Option<FolderId>>,
    /// Where each remote copy must end up.
    pub remote: BTreeMap<BookmarkId, Option<FolderId>>,
    /// Local files unknown to the service. Not uploaded; once indexed they
    /// read as deleted online and are retired by the following run.
    pub local_only: BTreeSet<BookmarkId>,
}

impl Diff {
    /// True when there is nothing to apply on either side.
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }
}

/// Computes the local and remote diffs over the union of all bookmark ids.
///
/// Fails with [`Error::InconsistentState`] on a triple that matches no case.
pub fn three_way_diff(
    online: &AssignmentTree,
    local: &AssignmentTree,
    index: &AssignmentTree,
) -> Result<Diff> {
    let ids: BTreeSet<BookmarkId> = online
        .keys()
        .chain(local.keys())
        .chain(index.keys())
        .copied()
        .collect();

    let mut diff = Diff::default();
    for id in ids {
        let (o, l, i) = (online.get(&id), local.get(&id), index.get(&id));
        let resolution = classify(o, l, i).ok_or_else(|| Error::InconsistentState {
            bookmark: id,
            online: slot_label(o),
            local: slot_label(l),
            index: slot_label(i),
        })?;

        match resolution {
            Resolution::PullRemote | Resolution::RemoteWins => {
                diff.local.insert(id, o.cloned());
            }
            Resolution::PushLocal => {
                diff.remote.insert(id, l.cloned());
            }
            Resolution::LocalOnly => {
                warn!(
                    "bookmark {} exists only locally in {} and will be retired on the next run unless it is added to Instapaper",
                    id,
                    slot_label(l)
                );
                diff.local_only.insert(id);
            }
            Resolution::Unchanged | Resolution::Converged => {}
        }
        if resolution != Resolution::Unchanged {
            debug!(
                "bookmark {}: {:?} (online: {}, local: {}, index: {})",
                id,
                resolution,
                slot_label(o),
                slot_label(l),
                slot_label(i)
            );
        }
    }

    Ok(diff)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
