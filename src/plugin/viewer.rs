//! Changelog viewer and editor

use std::path::{Path, PathBuf};

use super::commands::Effect;
use super::dialog::{ActionButton, DialogCallback, DialogRequest, DialogView};
use crate::changelog::constants::messages;
use crate::changelog::{ChangelogError, LogPathResolver, LogStore};
use crate::host::Document;

/// A loaded changelog, ready to be shown for editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogViewer {
    path: PathBuf,
    title: String,
    content: String,
}

impl LogViewer {
    /// Load the changelog of `document`
    ///
    /// Fails with [`ChangelogError::UnsavedDocument`] or
    /// [`ChangelogError::LogFileNotFound`] without touching the filesystem
    /// beyond the read.
    pub fn open<D: Document + ?Sized>(
        resolver: &LogPathResolver,
        store: &LogStore,
        document: &D,
    ) -> Result<Self, ChangelogError> {
        let path = resolver
            .resolve(document)
            .ok_or(ChangelogError::UnsavedDocument)?;
        let content = store.read_all(&path)?;
        Ok(Self {
            path,
            title: document.title(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn request(self) -> DialogRequest {
        DialogRequest {
            view: DialogView {
                title: self.title,
                label: format!("Changelog: {}", self.path.display()),
                text: self.content,
                buttons: vec![ActionButton::CLOSE, ActionButton::SAVE_EDITS],
            },
            callback: DialogCallback::LogViewer { path: self.path },
        }
    }
}

/// Effects of "Save Edits": replace the file verbatim, close, confirm
pub fn save_edits(path: &Path, text: String) -> Vec<Effect> {
    vec![
        Effect::Overwrite {
            path: path.to_path_buf(),
            content: text,
        },
        Effect::Close,
        Effect::Message(messages::CHANGELOG_SAVED.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Doc(String);

    impl Document for Doc {
        fn saved_path(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_open_unsaved_document() {
        let err = LogViewer::open(
            &LogPathResolver::default(),
            &LogStore::new(),
            &Doc(String::new()),
        )
        .unwrap_err();
        assert!(matches!(err, ChangelogError::UnsavedDocument));
    }

    #[test]
    fn test_open_missing_log_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let doc = Doc(dir.path().join("house.skp").display().to_string());
        let err = LogViewer::open(&LogPathResolver::default(), &LogStore::new(), &doc).unwrap_err();
        assert!(matches!(err, ChangelogError::LogFileNotFound(_)));
        assert!(!dir.path().join("house_changelog.txt").exists());
    }

    #[test]
    fn test_open_loads_content_and_title() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("house_changelog.txt");
        std::fs::write(&log, "hand edited").unwrap();
        let doc = Doc(dir.path().join("house.skp").display().to_string());

        let viewer = LogViewer::open(&LogPathResolver::default(), &LogStore::new(), &doc).unwrap();
        assert_eq!(viewer.path(), log.as_path());
        assert_eq!(viewer.content(), "hand edited");

        let request = viewer.request();
        assert_eq!(request.view.title, "house.skp");
        assert_eq!(request.view.text, "hand edited");
        assert_eq!(request.callback, DialogCallback::LogViewer { path: log });
    }

    #[test]
    fn test_save_edits_effects() {
        let effects = save_edits(Path::new("/a/log.txt"), "new text".to_string());
        assert_eq!(
            effects,
            vec![
                Effect::Overwrite {
                    path: PathBuf::from("/a/log.txt"),
                    content: "new text".to_string(),
                },
                Effect::Close,
                Effect::Message("Changelog saved.".to_string()),
            ]
        );
    }
}
