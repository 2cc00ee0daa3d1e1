//! Integration tests for the changelog file layer
//!
//! Resolver, entry serialization and store working together on real files.

mod common;

use chrono::NaiveDate;
use savelog::Config;
use savelog::changelog::{ChangelogError, LogEntry, LogPathResolver, LogStore};

use common::{TestWorkspace, UNSET_IDENTITY_VAR, block_count};

fn changelog_for(ws: &TestWorkspace, document: &str) -> std::path::PathBuf {
    let saved = ws.save(document);
    LogPathResolver::default()
        .resolve_path(&saved.display().to_string())
        .expect("saved document has a changelog path")
}

#[test]
fn test_changelog_lives_beside_document() {
    let ws = TestWorkspace::new();
    let path = changelog_for(&ws, "house.skp");

    assert_eq!(path.parent(), Some(ws.path()));
    assert_eq!(path.file_name().unwrap(), "house_changelog.txt");
}

#[test]
fn test_appends_accumulate_in_order() {
    let ws = TestWorkspace::new();
    let path = changelog_for(&ws, "house.skp");
    let store = LogStore::new();

    for i in 0..5 {
        store
            .append(&path, &LogEntry::now("alice", format!("change {i}")))
            .unwrap();
    }

    let content = store.read_all(&path).unwrap();
    assert_eq!(block_count(&content), 5);
    let positions: Vec<usize> = (0..5)
        .map(|i| content.find(&format!("change {i}\n")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_append_after_hand_edit_keeps_edit() {
    let ws = TestWorkspace::new();
    let path = changelog_for(&ws, "house.skp");
    let store = LogStore::new();

    store.overwrite(&path, "my own notes").unwrap();
    store.append(&path, &LogEntry::now("bob", "- Roof")).unwrap();

    let content = store.read_all(&path).unwrap();
    assert!(content.starts_with("my own notes\n["));
    assert_eq!(block_count(&content), 1);
}

#[test]
fn test_overwrite_replaces_exactly() {
    let ws = TestWorkspace::new();
    let path = changelog_for(&ws, "house.skp");
    let store = LogStore::new();

    store.append(&path, &LogEntry::now("alice", "one")).unwrap();
    store.overwrite(&path, "").unwrap();
    assert_eq!(store.read_all(&path).unwrap(), "");

    store.overwrite(&path, "x\ny\n").unwrap();
    assert_eq!(store.read_all(&path).unwrap(), "x\ny\n");
}

#[test]
fn test_read_missing_is_not_found() {
    let ws = TestWorkspace::new();
    let path = changelog_for(&ws, "house.skp");

    let err = LogStore::new().read_all(&path).unwrap_err();
    assert!(matches!(err, ChangelogError::LogFileNotFound(_)));
    assert!(err.is_informational());
    assert!(!path.exists());
}

#[test]
fn test_entry_written_bit_exact() {
    let ws = TestWorkspace::new();
    let path = changelog_for(&ws, "house.skp");
    let timestamp = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(14, 7, 9)
        .unwrap();

    let entry = LogEntry::new(timestamp, "alice", "- Added roof");
    LogStore::new().append(&path, &entry).unwrap();

    assert_eq!(
        ws.read("house_changelog.txt").unwrap(),
        "\n[2024-03-05 14:07:09] User: alice - Save Commit:\n- Added roof\n----------------------------------------"
    );
}

#[test]
fn test_config_author_falls_back_to_unknown() {
    let config = Config::default().with_identity_vars(vec![UNSET_IDENTITY_VAR.to_string()]);
    assert_eq!(config.author(), "Unknown");
}

#[test]
fn test_custom_suffix_resolves() {
    let ws = TestWorkspace::new();
    let saved = ws.save("part.blend");
    let resolver = LogPathResolver::new(".blend");

    let path = resolver.resolve_path(&saved.display().to_string()).unwrap();
    assert_eq!(path.file_name().unwrap(), "part_changelog.txt");
}
