// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    simple = { "1", "Reading List", "Reading_List_1" },
    pseudo_unread = { "unread", "unread", "unread_unread" },
    pseudo_archive = { "archive", "archive", "archive_archive" },
    many_spaces = { "77", "a b c", "a_b_c_77" },
    path_separator = { "9", "A/B", "AB_9" },
    parent_dir = { "4", "../up", "..up_4" },
    nothing_left = { "5", "???", "folder_5" },
)]
fn folder_directory_name(id: &str, title: &str, expected: &str) {
    let folder = Folder::new(FolderId::new(id), title);
    assert_eq!(folder.directory_name(), expected);
}

#[test]
fn pseudo_folders_are_unread_and_archive() {
    let [unread, archive] = Folder::pseudo_folders();
    assert_eq!(unread.id, FolderId::unread());
    assert_eq!(archive.id, FolderId::archive());
    assert!(unread.id.is_pseudo());
    assert!(archive.id.is_pseudo());
    assert!(!FolderId::new("12").is_pseudo());
}

#[parameterized(
    plain = { "Test Bookmark", "Test_Bookmark" },
    punctuation = { "What's new? (2026)", "Whats_new_(2026)" },
    unicode = { "Café: ça va", "Caf_a_va" },
    slashes = { "a/b\\c", "abc" },
)]
fn safe_file_name_filters_characters(title: &str, expected: &str) {
    assert_eq!(safe_file_name(title), expected);
}

#[test]
fn bookmark_file_stem_ends_in_id() {
    let bookmark = Bookmark::new(BookmarkId(1), "Test Bookmark", "http://example.com");
    assert_eq!(bookmark.file_stem, "Test_Bookmark_1");
}

#[test]
fn bookmark_file_stem_falls_back_for_empty_title() {
    let bookmark = Bookmark::new(BookmarkId(42), "???", "http://example.com");
    assert_eq!(bookmark.file_stem, "bookmark_42");
}

#[test]
fn bookmark_id_parses_and_displays() {
    let id: BookmarkId = "1234".parse().unwrap();
    assert_eq!(id, BookmarkId(1234));
    assert_eq!(id.to_string(), "1234");
    assert!("12a".parse::<BookmarkId>().is_err());
}

#[test]
fn ids_serialize_transparently() {
    let mut tree = AssignmentTree::new();
    tree.insert(BookmarkId(5), FolderId::unread());
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"{"5":"unread"}"#);
}

#[test]
fn slot_label_marks_absence() {
    assert_eq!(slot_label(Some(&FolderId::new("3"))), "3");
    assert_eq!(slot_label(None), "absent");
}
