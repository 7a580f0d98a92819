// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use shelf_core::RemoteError;
use std::collections::HashMap;
use tempfile::TempDir;
use yare::parameterized;

#[derive(Default)]
struct StubSource {
    texts: HashMap<BookmarkId, String>,
    requested: Vec<BookmarkId>,
}

impl TextSource for StubSource {
    fn text(&mut self, bookmark: BookmarkId) -> RemoteResult<String> {
        self.requested.push(bookmark);
        self.texts.get(&bookmark).cloned().ok_or(RemoteError::Api {
            code: 1241,
            message: "Invalid or missing bookmark_id".to_string(),
        })
    }
}

fn fetcher_with(id: u64, text: &str) -> ArticleFetcher<StubSource> {
    let mut source = StubSource::default();
    source.texts.insert(BookmarkId(id), text.to_string());
    ArticleFetcher::new(source)
}

#[test]
fn stores_article_named_after_file_stem() {
    let temp = TempDir::new().unwrap();
    let bookmark = Bookmark::new(BookmarkId(101), "Rust & You", "https://a.example/?x=1&y=2");
    let mut fetcher = fetcher_with(101, "<p>Ownership.</p>");

    let path = fetcher.fetch_and_store(&bookmark, temp.path()).unwrap();

    assert_eq!(path, temp.path().join("Rust__You_101.html"));
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>Rust &amp; You</title>"));
    assert!(html.contains("<h1>Rust &amp; You</h1>"));
    assert!(html.contains("href=\"https://a.example/?x=1&amp;y=2\""));
    assert!(html.contains("<p>Ownership.</p>"));
    assert_eq!(fetcher.source.requested, vec![BookmarkId(101)]);
}

#[parameterized(
    empty = { "" },
    whitespace = { "  \n\t" },
)]
fn empty_text_is_skipped(text: &str) {
    let temp = TempDir::new().unwrap();
    let bookmark = Bookmark::new(BookmarkId(3), "Nothing", "u");
    let mut fetcher = fetcher_with(3, text);

    let err = fetcher.fetch_and_store(&bookmark, temp.path()).unwrap_err();

    assert!(matches!(err, FetchError::Empty(BookmarkId(3))));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn remote_failure_becomes_fetch_error() {
    let temp = TempDir::new().unwrap();
    let bookmark = Bookmark::new(BookmarkId(4), "Gone", "u");
    let mut fetcher = ArticleFetcher::new(StubSource::default());

    let err = fetcher.fetch_and_store(&bookmark, temp.path()).unwrap_err();

    assert!(matches!(err, FetchError::Remote(RemoteError::Api { code: 1241, .. })));
}

#[test]
fn missing_destination_is_io_error() {
    let temp = TempDir::new().unwrap();
    let bookmark = Bookmark::new(BookmarkId(5), "Lost", "u");
    let mut fetcher = fetcher_with(5, "text");

    let err = fetcher
        .fetch_and_store(&bookmark, &temp.path().join("missing"))
        .unwrap_err();

    assert!(matches!(err, FetchError::Io(_)));
}

#[parameterized(
    doctype = { "<!DOCTYPE html><html><body>x</body></html>" },
    lowercase_doctype = { "\n  <!doctype html>\n<html></html>" },
    bare_html = { "<HTML><body>x</body></HTML>" },
)]
fn full_documents_are_stored_verbatim(text: &str) {
    let bookmark = Bookmark::new(BookmarkId(1), "T", "u");
    assert_eq!(render(&bookmark, text), text);
}

#[test]
fn fragments_are_wrapped() {
    let bookmark = Bookmark::new(BookmarkId(1), "<T>", "u");
    let html = render(&bookmark, "\n<p>body</p>\n");
    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<h1>&lt;T&gt;</h1>"));
    assert!(html.contains("\n<p>body</p>\n</body>"));
}
