// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use shelf_core::RemoteError;

/// All possible errors that can occur in the shelf CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: no shelf.toml in {0}\n  hint: run 'shelf init' first")]
    NotInitialized(String),

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("missing credential: {field}\n  hint: set '{field}' under [instapaper] in shelf.toml or export {var}")]
    MissingCredential {
        field: &'static str,
        var: &'static str,
    },

    #[error("{field} must be at least 1")]
    InvalidLimit { field: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Sync(#[from] shelf_core::Error),

    #[error("instapaper: {0}")]
    Remote(#[from] RemoteError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
