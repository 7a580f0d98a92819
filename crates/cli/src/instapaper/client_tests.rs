// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn parse_items_reads_flat_array() {
    let body = r#"[
        {"type": "meta"},
        {"type": "user", "user_id": 9, "username": "reader"},
        {"type": "bookmark", "bookmark_id": 101, "title": "Hello", "url": "https://a.example", "progress": 0.5},
        {"type": "folder", "folder_id": 7, "title": "Long Reads", "position": 1}
    ]"#;

    let items = parse_items(body).unwrap();

    assert_eq!(
        items,
        vec![
            Item::Other,
            Item::Other,
            Item::Bookmark {
                bookmark_id: 101,
                title: Some("Hello".to_string()),
                url: Some("https://a.example".to_string()),
            },
            Item::Folder {
                folder_id: 7,
                title: Some("Long Reads".to_string()),
            },
        ]
    );
}

#[test]
fn parse_items_reads_bookmarks_object() {
    let body = r#"{
        "user": {"type": "user", "user_id": 9},
        "bookmarks": [{"type": "bookmark", "bookmark_id": 5, "title": null, "url": "u"}],
        "highlights": []
    }"#;

    let items = parse_items(body).unwrap();

    assert_eq!(
        items,
        vec![Item::Bookmark {
            bookmark_id: 5,
            title: None,
            url: Some("u".to_string()),
        }]
    );
}

#[test]
fn parse_items_surfaces_error_item() {
    let body = r#"[{"type": "error", "error_code": 1241, "message": "Invalid or missing bookmark_id"}]"#;

    let err = parse_items(body).unwrap_err();

    assert!(
        matches!(err, RemoteError::Api { code: 1241, ref message } if message == "Invalid or missing bookmark_id")
    );
}

#[parameterized(
    not_json = { "<html>oops</html>" },
    scalar = { "42" },
    bad_field_type = { r#"[{"type": "bookmark", "bookmark_id": "x"}]"# },
)]
fn parse_items_rejects_malformed_body(body: &str) {
    assert!(matches!(parse_items(body), Err(RemoteError::Decode(_))));
}

#[test]
fn status_error_prefers_api_payload() {
    let err = status_error(
        400,
        r#"[{"type": "error", "error_code": 1500, "message": "Unexpected service error"}]"#,
    );
    assert!(matches!(err, RemoteError::Api { code: 1500, .. }));
}

#[test]
fn status_error_falls_back_to_http_status() {
    let err = status_error(401, "Invalid xAuth credentials.\n");
    assert_eq!(
        err.to_string(),
        "request failed: HTTP 401: Invalid xAuth credentials."
    );
}

#[test]
fn new_client_is_not_authenticated() {
    let client = InstapaperClient::new("https://example.invalid/api/1/", "ck", "cs");
    assert!(!client.is_authenticated());
    assert_eq!(client.url("folders/list"), "https://example.invalid/api/1/folders/list");
}

#[test]
fn login_failure_is_reported_as_auth_error() {
    // nothing listens on the discard port
    let client = InstapaperClient::new("http://127.0.0.1:9/api/1", "ck", "cs");
    let err = client.login("reader", "").err().unwrap();
    assert!(matches!(err, RemoteError::Auth(_)));
}
