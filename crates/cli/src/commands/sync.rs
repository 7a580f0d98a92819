// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use shelf_core::model::slot_label;
use shelf_core::{BookmarkService, ContentFetcher, SyncReport, Synchronizer};

use crate::config::Config;
use crate::env;
use crate::error::Result;
use crate::instapaper::{ArticleFetcher, InstapaperClient, DEFAULT_API_URL};
use crate::time_phase;

pub fn run(root: &Path, limit: Option<usize>, dry_run: bool) -> Result<()> {
    let config = Config::load(root)?;
    let options = config.sync_options(root, limit)?;
    let credentials = config.credentials()?;
    let api_url = env::api_url().unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = time_phase!("instapaper::login", {
        InstapaperClient::connect(&api_url, &credentials)?
    });
    let fetcher = ArticleFetcher::new(client.clone());
    let mut synchronizer = Synchronizer::new(client, fetcher, options);

    let report = execute(&mut synchronizer, dry_run)?;
    print!("{}", format_report(&report));
    Ok(())
}

/// Runs (or plans) one pass with any service and fetcher.
pub fn execute<S: BookmarkService, F: ContentFetcher>(
    synchronizer: &mut Synchronizer<S, F>,
    dry_run: bool,
) -> Result<SyncReport> {
    let report = if dry_run {
        time_phase!("sync::plan", { synchronizer.plan()? })
    } else {
        time_phase!("sync::run", { synchronizer.run()? })
    };
    Ok(report)
}

/// Human-readable run summary for stdout.
pub fn format_report(report: &SyncReport) -> String {
    let mut out = String::new();
    if report.dry_run {
        out.push_str("Dry run: nothing was changed\n");
    }
    out.push_str(&format!("Online bookmarks: {}\n", report.online_count));
    out.push_str(&format!("Local bookmarks: {}\n", report.local_count));

    if report.dry_run {
        for folder in &report.folders.to_create {
            out.push_str(&format!(
                "Folder to create: {} ({})\n",
                folder.title, folder.id
            ));
        }
        for folder in &report.folders.to_retire {
            out.push_str(&format!(
                "Folder to retire: {} ({})\n",
                folder.title, folder.id
            ));
        }
    } else {
        out.push_str(&format!(
            "Folders: {} created, {} retired\n",
            report.folders.to_create.len(),
            report.folders.to_retire.len()
        ));
    }

    out.push_str(&format!("Local changes: {}\n", report.diff.local.len()));
    if report.dry_run {
        for (id, target) in &report.diff.local {
            out.push_str(&format!("  {} -> {}\n", id, slot_label(target.as_ref())));
        }
    }
    out.push_str(&format!("Remote changes: {}\n", report.diff.remote.len()));
    if report.dry_run {
        for (id, target) in &report.diff.remote {
            out.push_str(&format!("  {} -> {}\n", id, slot_label(target.as_ref())));
        }
    }
    if !report.diff.local_only.is_empty() {
        let ids: Vec<String> = report.diff.local_only.iter().map(|id| id.to_string()).collect();
        out.push_str(&format!(
            "Not on Instapaper, retired next run: {}\n",
            ids.join(", ")
        ));
    }
    if report.dry_run {
        return out;
    }

    let local = &report.local;
    out.push_str(&format!(
        "Local: {} fetched, {} moved, {} retired, {} failed\n",
        local.fetched, local.moved, local.retired, local.fetch_failed
    ));
    let remote = &report.remote;
    out.push_str(&format!(
        "Remote: {} archived, {} unarchived, {} moved, {} skipped\n",
        remote.archived, remote.unarchived, remote.moved, remote.skipped
    ));
    out.push_str(&format!("Indexed: {}\n", report.indexed));
    out
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
