// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Instapaper collaborators for the synchronizer.

pub mod article;
pub mod client;
pub mod oauth;

use std::fmt;

pub use article::{ArticleFetcher, TextSource};
pub use client::{InstapaperClient, DEFAULT_API_URL};

/// Everything needed for an xAuth login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub username: String,
    /// May be empty; Instapaper accounts can exist without a password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
