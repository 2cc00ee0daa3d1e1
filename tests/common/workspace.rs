//! TestWorkspace helper for integration tests.
//!
//! Provides a temporary directory holding document files, and a way to
//! "save" them so the workbench notices.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use savelog::app::App;
use tempfile::TempDir;

/// Every save moves the clock forward so mtimes always differ
static SAVE_CLOCK: AtomicU64 = AtomicU64::new(1);

/// Identity variable that is never set, so entries are attributed to `Unknown`
pub const UNSET_IDENTITY_VAR: &str = "SAVELOG_TEST_IDENTITY_NEVER_SET";

/// A temporary directory for document files.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a document inside the workspace (not created)
    pub fn document(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write the document and give it a fresh modification time
    pub fn save(&self, name: &str) -> PathBuf {
        let path = self.document(name);
        fs::write(&path, "model data").expect("Failed to write document");

        let offset = SAVE_CLOCK.fetch_add(1, Ordering::SeqCst);
        let modified = SystemTime::now() + Duration::from_secs(offset * 10);
        File::options()
            .write(true)
            .open(&path)
            .and_then(|f| f.set_modified(modified))
            .expect("Failed to set modification time");
        path
    }

    /// Read a file in the workspace, None if missing
    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.document(name)).ok()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.document(name).exists()
    }
}

/// Count entry blocks by their header line
pub fn block_count(content: &str) -> usize {
    content.matches(" - Save Commit:\n").count()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_s() -> KeyEvent {
    KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
}

/// Type text into whatever has focus (newlines become Enter)
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let code = if c == '\n' {
            KeyCode::Enter
        } else {
            KeyCode::Char(c)
        };
        app.on_key_event(key(code));
    }
}
