// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shelf configuration management.
//!
//! Configuration is stored in `shelf.toml` at the shelf root and includes:
//! - `books_dir` / `index_file`: where the library and its index live
//! - `limit`: bookmarks listed per folder (capped at the service maximum)
//! - `fetch_pause_ms`: pause after each article download
//! - `[instapaper]`: API consumer credentials and the account login
//!
//! Secrets can be supplied through `SHELF_*` environment variables instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use shelf_core::service::MAX_PAGE_LIMIT;
use shelf_core::sync::{DEFAULT_FETCH_PAUSE, DEFAULT_LIMIT};
use shelf_core::SyncOptions;
use tracing::warn;

use crate::env::vars;
use crate::error::{Error, Result};
use crate::instapaper::Credentials;

pub const CONFIG_FILE_NAME: &str = "shelf.toml";

/// Written by `shelf init`; parses to [`Config::default`].
const TEMPLATE: &str = r#"# shelf configuration

# Library directory, one subdirectory per Instapaper folder.
books_dir = "books"

# Index of the last synchronized state.
index_file = "index.json"

# Bookmarks listed per folder (the service allows at most 500).
limit = 100

# Pause after each article download, in milliseconds.
fetch_pause_ms = 1000

[instapaper]
# OAuth consumer credentials issued by Instapaper.
# Environment: SHELF_CONSUMER_KEY, SHELF_CONSUMER_SECRET
consumer_key = ""
consumer_secret = ""

# Account login. Environment: SHELF_USERNAME, SHELF_PASSWORD
username = ""
password = ""
"#;

/// Shelf configuration stored in `shelf.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Library root, relative to the shelf root unless absolute.
    #[serde(default = "default_books_dir")]
    pub books_dir: String,
    /// Index file, relative to the shelf root unless absolute.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_fetch_pause_ms")]
    pub fetch_pause_ms: u64,
    #[serde(default)]
    pub instapaper: InstapaperConfig,
}

/// The `[instapaper]` section.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstapaperConfig {
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for InstapaperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstapaperConfig")
            .field("consumer_key", &self.consumer_key)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn default_books_dir() -> String {
    "books".to_string()
}

fn default_index_file() -> String {
    "index.json".to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_fetch_pause_ms() -> u64 {
    DEFAULT_FETCH_PAUSE.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Config {
            books_dir: default_books_dir(),
            index_file: default_index_file(),
            limit: default_limit(),
            fetch_pause_ms: default_fetch_pause_ms(),
            instapaper: InstapaperConfig::default(),
        }
    }
}

impl Config {
    /// Loads `shelf.toml` from the shelf root.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Err(Error::NotInitialized(root.display().to_string()));
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(root.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    pub fn books_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.books_dir)
    }

    pub fn index_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.index_file)
    }

    /// Page size for this run: the override if given, else the configured
    /// limit, capped at the service maximum.
    pub fn effective_limit(&self, requested: Option<usize>) -> Result<usize> {
        let limit = requested.unwrap_or(self.limit);
        if limit == 0 {
            return Err(Error::InvalidLimit { field: "limit" });
        }
        if limit > MAX_PAGE_LIMIT {
            warn!(
                "limit {} exceeds the service maximum, using {}",
                limit, MAX_PAGE_LIMIT
            );
            return Ok(MAX_PAGE_LIMIT);
        }
        Ok(limit)
    }

    pub fn sync_options(&self, root: &Path, limit: Option<usize>) -> Result<SyncOptions> {
        Ok(SyncOptions::new(self.books_path(root), self.index_path(root))
            .with_limit(self.effective_limit(limit)?)
            .with_fetch_pause(Duration::from_millis(self.fetch_pause_ms)))
    }

    /// Credentials from the config file, overridden by the environment.
    pub fn credentials(&self) -> Result<Credentials> {
        self.credentials_with(crate::env::non_empty)
    }

    pub(crate) fn credentials_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Credentials> {
        let section = &self.instapaper;
        let required = |field: &'static str, var: &'static str, configured: &str| {
            lookup(var)
                .or_else(|| (!configured.is_empty()).then(|| configured.to_string()))
                .ok_or(Error::MissingCredential { field, var })
        };

        Ok(Credentials {
            consumer_key: required(
                "consumer_key",
                vars::SHELF_CONSUMER_KEY,
                &section.consumer_key,
            )?,
            consumer_secret: required(
                "consumer_secret",
                vars::SHELF_CONSUMER_SECRET,
                &section.consumer_secret,
            )?,
            username: required("username", vars::SHELF_USERNAME, &section.username)?,
            password: lookup(vars::SHELF_PASSWORD).unwrap_or_else(|| section.password.clone()),
        })
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Initializes a shelf: writes the template `shelf.toml` and creates the library directory.
///
/// Returns the path of the written config file.
pub fn init_shelf(root: &Path) -> Result<PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(Error::AlreadyInitialized(root.display().to_string()));
    }
    fs::create_dir_all(root)?;
    fs::write(&config_path, TEMPLATE)?;
    fs::create_dir_all(Config::default().books_path(root))?;
    Ok(config_path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
