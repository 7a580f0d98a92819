// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
pub use httpmock::Method::POST;
pub use httpmock::{Mock, MockServer};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

const SECRET_VARS: [&str; 5] = [
    "SHELF_CONSUMER_KEY",
    "SHELF_CONSUMER_SECRET",
    "SHELF_USERNAME",
    "SHELF_PASSWORD",
    "SHELF_API_URL",
];

/// The shelf binary with credentials from the caller's environment removed.
pub fn shelf() -> Command {
    let mut cmd = cargo_bin_cmd!("shelf");
    for var in SECRET_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    shelf()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Writes a complete `shelf.toml` with test credentials and no fetch pause.
pub fn write_config(root: &Path, password: &str) {
    let config = format!(
        r#"books_dir = "books"
index_file = "index.json"
limit = 100
fetch_pause_ms = 0

[instapaper]
consumer_key = "ck"
consumer_secret = "cs"
username = "reader@example.com"
password = "{password}"
"#
    );
    std::fs::write(root.join("shelf.toml"), config).unwrap();
}

pub const ACCESS_TOKEN_REPLY: &str = "oauth_token=tok&oauth_token_secret=sec";

/// Mocks registered by [`mock_instapaper`], one per endpoint and folder.
pub struct Instapaper<'a> {
    pub login: Mock<'a>,
    pub folders: Mock<'a>,
    pub unread: Mock<'a>,
    pub archived: Mock<'a>,
    pub long_reads: Mock<'a>,
    pub get_text: Mock<'a>,
    pub archive: Mock<'a>,
    pub unarchive: Mock<'a>,
    pub move_to: Mock<'a>,
}

/// A `200` reply to POSTs on `path` whose form body contains `body`.
pub fn mock_post<'a>(server: &'a MockServer, path: &str, body: &str, reply: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST).path(path).body_contains(body);
        then.status(200).body(reply);
    })
}

/// One custom folder (7, "Long Reads"); bookmark 101 unread and 202 in folder 7.
pub fn mock_instapaper(server: &MockServer) -> Instapaper<'_> {
    Instapaper {
        login: mock_post(
            server,
            "/api/1/oauth/access_token",
            "x_auth_mode=client_auth",
            ACCESS_TOKEN_REPLY,
        ),
        folders: server.mock(|when, then| {
            when.method(POST).path("/api/1/folders/list");
            then.status(200)
                .body(r#"[{"type":"folder","folder_id":7,"title":"Long Reads"}]"#);
        }),
        unread: mock_post(
            server,
            "/api/1/bookmarks/list",
            "folder_id=unread",
            r#"[{"type":"meta"},{"type":"bookmark","bookmark_id":101,"title":"Hello World","url":"https://a.example/hello"}]"#,
        ),
        archived: mock_post(server, "/api/1/bookmarks/list", "folder_id=archive", "[]"),
        long_reads: mock_post(
            server,
            "/api/1/bookmarks/list",
            "folder_id=7",
            r#"[{"type":"bookmark","bookmark_id":202,"title":"Deep Dive","url":"https://b.example/dive"}]"#,
        ),
        get_text: mock_post(server, "/api/1/bookmarks/get_text", "bookmark_id=", "<p>Article body</p>"),
        archive: mock_post(server, "/api/1/bookmarks/archive", "bookmark_id=", "[]"),
        unarchive: mock_post(server, "/api/1/bookmarks/unarchive", "bookmark_id=", "[]"),
        move_to: mock_post(server, "/api/1/bookmarks/move", "bookmark_id=", "[]"),
    }
}

/// Accepts the login and lists no custom folders.
pub fn mock_empty_account(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST).path("/api/1/oauth/access_token");
        then.status(200).body(ACCESS_TOKEN_REPLY);
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/1/folders/list");
        then.status(200).body("[]");
    });
}

/// The shelf binary pointed at `server`.
pub fn shelf_against(server: &MockServer) -> Command {
    let mut cmd = shelf();
    cmd.env("SHELF_API_URL", server.url("/api/1"));
    cmd
}
