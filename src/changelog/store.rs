//! Changelog file access
//!
//! Append, read and overwrite only. Nothing here locks the file; two processes
//! writing the same log at once can interleave.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::{ChangelogError, LogEntry};

/// File-backed changelog store
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStore;

impl LogStore {
    pub fn new() -> Self {
        Self
    }

    /// Append one serialized entry, creating the file if needed
    pub fn append(&self, path: &Path, entry: &LogEntry) -> Result<(), ChangelogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| io_error(path, e))?;

        // Single write so an entry is never split across calls
        file.write_all(entry.serialize().as_bytes())
            .map_err(|e| io_error(path, e))?;

        tracing::debug!(path = %path.display(), author = %entry.author, "appended changelog entry");
        Ok(())
    }

    /// Read the whole log
    pub fn read_all(&self, path: &Path) -> Result<String, ChangelogError> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ChangelogError::LogFileNotFound(path.to_path_buf())
            } else {
                io_error(path, e)
            }
        })
    }

    /// Replace the whole log with `content`
    pub fn overwrite(&self, path: &Path, content: &str) -> Result<(), ChangelogError> {
        fs::write(path, content).map_err(|e| io_error(path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "overwrote changelog");
        Ok(())
    }

    /// Check whether a log file exists at `path`
    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn io_error(path: &Path, source: io::Error) -> ChangelogError {
    ChangelogError::Io {
        path: path.to_path_buf(),
        source,
    }
}
