// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Article download: turns a bookmark's processed text into a standalone HTML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use shelf_core::{Bookmark, BookmarkId, ContentFetcher, FetchError, RemoteResult};

/// File extension of stored articles.
pub const ARTICLE_EXTENSION: &str = "html";

/// Source of processed article text.
pub trait TextSource {
    fn text(&mut self, bookmark: BookmarkId) -> RemoteResult<String>;
}

/// [`ContentFetcher`] writing `<file_stem>.html` into the destination folder.
pub struct ArticleFetcher<T> {
    source: T,
}

impl<T: TextSource> ArticleFetcher<T> {
    pub fn new(source: T) -> Self {
        ArticleFetcher { source }
    }
}

impl<T: TextSource> ContentFetcher for ArticleFetcher<T> {
    fn fetch_and_store(
        &mut self,
        bookmark: &Bookmark,
        destination: &Path,
    ) -> Result<PathBuf, FetchError> {
        let text = self.source.text(bookmark.id)?;
        if text.trim().is_empty() {
            return Err(FetchError::Empty(bookmark.id));
        }
        let path = destination.join(format!("{}.{}", bookmark.file_stem, ARTICLE_EXTENSION));
        fs::write(&path, render(bookmark, &text))?;
        debug!("wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }
}

/// Wraps an article body in a document with a title heading and source link.
///
/// Text that is already a full document is stored as-is.
pub fn render(bookmark: &Bookmark, text: &str) -> String {
    if is_document(text) {
        return text.to_string();
    }
    let title = escape(&bookmark.title);
    let url = escape(&bookmark.url);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<p><a href=\"{url}\">{url}</a></p>\n{body}\n</body>\n</html>\n",
        body = text.trim()
    )
}

fn is_document(text: &str) -> bool {
    let head: String = text
        .trim_start()
        .chars()
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "article_tests.rs"]
mod tests;
