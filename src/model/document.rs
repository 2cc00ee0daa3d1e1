//! Document files watched by the terminal host

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::host::Document;

/// A document file on disk
///
/// The file counts as saved once it exists; every later change of its
/// modification time is another save.
#[derive(Debug, Clone)]
pub struct WatchedDocument {
    target: PathBuf,
    saved_path: String,
    last_modified: Option<SystemTime>,
    /// Whether post-save events are delivered for this document
    pub(crate) observed: bool,
}

impl WatchedDocument {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let last_modified = modified_time(&target);
        let saved_path = if last_modified.is_some() {
            target.display().to_string()
        } else {
            String::new()
        };
        Self {
            target,
            saved_path,
            last_modified,
            observed: false,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Whether the host delivers post-save events for this document
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Display name, available before the first save
    pub fn name(&self) -> String {
        self.target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target.display().to_string())
    }

    /// Check the file and report whether it was saved since the last check
    ///
    /// A deleted file is not a save; the last saved path is kept.
    pub fn detect_save(&mut self) -> bool {
        let Some(modified) = modified_time(&self.target) else {
            return false;
        };
        if self.last_modified == Some(modified) {
            return false;
        }
        self.last_modified = Some(modified);
        self.saved_path = self.target.display().to_string();
        true
    }
}

impl Document for WatchedDocument {
    fn saved_path(&self) -> &str {
        &self.saved_path
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
