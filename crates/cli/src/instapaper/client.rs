// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking Instapaper Full API client.
//!
//! Every call is a signed form POST. Listing endpoints answer with a JSON
//! array of typed items; failures arrive as an item of type `error`.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use shelf_core::{
    Bookmark, BookmarkId, BookmarkService, Folder, FolderId, RemoteError, RemoteResult,
};

use super::article::TextSource;
use super::oauth::{parse_token, Signer};
use super::Credentials;

/// Base URL of the Instapaper Full API.
pub const DEFAULT_API_URL: &str = "https://www.instapaper.com/api/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One element of a listing response.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum Item {
    Folder {
        folder_id: u64,
        title: Option<String>,
    },
    Bookmark {
        bookmark_id: u64,
        title: Option<String>,
        url: Option<String>,
    },
    Error {
        error_code: u32,
        message: Option<String>,
    },
    #[serde(other)]
    Other,
}

/// Decodes a listing body, surfacing an embedded error item as [`RemoteError::Api`].
///
/// Accepts both the flat array form and an object carrying a `bookmarks` array.
pub(crate) fn parse_items(body: &str) -> RemoteResult<Vec<Item>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))?;
    let values = match value {
        Value::Array(values) => values,
        Value::Object(mut map) => match map.remove("bookmarks") {
            Some(Value::Array(values)) => values,
            _ => vec![Value::Object(map)],
        },
        other => {
            return Err(RemoteError::Decode(format!("expected a list, got {other}")));
        }
    };

    let items = values
        .into_iter()
        .map(serde_json::from_value::<Item>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| RemoteError::Decode(e.to_string()))?;

    for item in &items {
        if let Item::Error {
            error_code,
            message,
        } = item
        {
            return Err(RemoteError::Api {
                code: *error_code,
                message: message.clone().unwrap_or_default(),
            });
        }
    }
    Ok(items)
}

/// Maps a non-2xx response to the API error it carries, or a request error.
pub(crate) fn status_error(status: u16, body: &str) -> RemoteError {
    match parse_items(body) {
        Err(e @ RemoteError::Api { .. }) => e,
        _ => RemoteError::Request(format!("HTTP {status}: {}", body.trim())),
    }
}

/// Instapaper client implementing [`BookmarkService`] and [`TextSource`].
///
/// Cloning shares the underlying connection pool and the access token.
#[derive(Clone)]
pub struct InstapaperClient {
    agent: ureq::Agent,
    base_url: String,
    signer: Signer,
}

impl InstapaperClient {
    pub fn new(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        InstapaperClient {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            signer: Signer::new(consumer_key, consumer_secret),
        }
    }

    /// Creates a client and exchanges the username and password for an access token.
    pub fn connect(base_url: &str, credentials: &Credentials) -> RemoteResult<Self> {
        InstapaperClient::new(
            base_url,
            credentials.consumer_key.as_str(),
            credentials.consumer_secret.as_str(),
        )
        .login(&credentials.username, &credentials.password)
    }

    /// xAuth login.
    pub fn login(mut self, username: &str, password: &str) -> RemoteResult<Self> {
        let body = self
            .post(
                "oauth/access_token",
                &[
                    ("x_auth_username", username),
                    ("x_auth_password", password),
                    ("x_auth_mode", "client_auth"),
                ],
            )
            .map_err(|e| match e {
                RemoteError::Auth(_) => e,
                other => RemoteError::Auth(other.to_string()),
            })?;
        let token = parse_token(&body)?;
        debug!("logged in as {}", username);
        self.signer = self.signer.with_token(token);
        Ok(self)
    }

    pub fn is_authenticated(&self) -> bool {
        self.signer.has_token()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn post(&self, path: &str, params: &[(&str, &str)]) -> RemoteResult<String> {
        let url = self.url(path);
        let authorization = self.signer.authorization("POST", &url, params)?;
        debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &authorization)
            .send_form(params);
        match response {
            Ok(response) => response
                .into_string()
                .map_err(|e| RemoteError::Request(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(status_error(status, &body))
            }
            Err(e) => Err(RemoteError::Request(e.to_string())),
        }
    }

    fn post_items(&self, path: &str, params: &[(&str, &str)]) -> RemoteResult<Vec<Item>> {
        let body = self.post(path, params)?;
        parse_items(&body)
    }

    fn post_bookmark(&self, path: &str, bookmark: &Bookmark) -> RemoteResult<()> {
        let id = bookmark.id.to_string();
        self.post_items(path, &[("bookmark_id", id.as_str())])?;
        Ok(())
    }
}

impl BookmarkService for InstapaperClient {
    fn list_folders(&mut self) -> RemoteResult<Vec<Folder>> {
        let items = self.post_items("folders/list", &[])?;
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Item::Folder { folder_id, title } => Some(Folder::new(
                    FolderId::new(folder_id.to_string()),
                    title.unwrap_or_default(),
                )),
                _ => None,
            })
            .collect())
    }

    fn list_bookmarks(&mut self, folder: &FolderId, limit: usize) -> RemoteResult<Vec<Bookmark>> {
        let limit = limit.to_string();
        let items = self.post_items(
            "bookmarks/list",
            &[("folder_id", folder.as_str()), ("limit", limit.as_str())],
        )?;
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Item::Bookmark {
                    bookmark_id,
                    title,
                    url,
                } => Some(Bookmark::new(
                    BookmarkId(bookmark_id),
                    title.unwrap_or_default(),
                    url.unwrap_or_default(),
                )),
                _ => None,
            })
            .collect())
    }

    fn archive(&mut self, bookmark: &Bookmark) -> RemoteResult<()> {
        self.post_bookmark("bookmarks/archive", bookmark)
    }

    fn unarchive(&mut self, bookmark: &Bookmark) -> RemoteResult<()> {
        self.post_bookmark("bookmarks/unarchive", bookmark)
    }

    fn move_to(&mut self, bookmark: &Bookmark, folder: &FolderId) -> RemoteResult<()> {
        let id = bookmark.id.to_string();
        self.post_items(
            "bookmarks/move",
            &[("bookmark_id", id.as_str()), ("folder_id", folder.as_str())],
        )?;
        Ok(())
    }
}

impl TextSource for InstapaperClient {
    fn text(&mut self, bookmark: BookmarkId) -> RemoteResult<String> {
        let id = bookmark.to_string();
        self.post("bookmarks/get_text", &[("bookmark_id", id.as_str())])
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
