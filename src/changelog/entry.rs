//! Changelog entries and author attribution

use std::env;
use std::fmt;

use chrono::{Local, NaiveDateTime};

use super::constants::{UNKNOWN_AUTHOR, entry};

/// One timestamped, attributed change description
///
/// Entries are only ever serialized; the log file is never parsed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time of the save
    pub timestamp: NaiveDateTime,
    /// Who saved
    pub author: String,
    /// Verbatim user text (may be empty or multi-line)
    pub message: String,
}

impl LogEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            message: message.into(),
        }
    }

    /// Create an entry stamped with the current local time
    pub fn now(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), author, message)
    }

    /// Serialize the entry block exactly as it is written to disk
    ///
    /// Format: `\n[YYYY-MM-DD HH:MM:SS] User: <author> - Save Commit:\n<message>\n<separator>`
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n[{}] User: {}{}\n{}\n{}",
            self.timestamp.format(entry::TIMESTAMP_FORMAT),
            self.author,
            entry::HEADER_TRAILER,
            self.message,
            entry::SEPARATOR
        )
    }
}

/// Resolve the author name from the process environment
pub fn resolve_username<S: AsRef<str>>(vars: &[S]) -> String {
    resolve_username_with(vars, |name| env::var(name).ok())
}

/// Resolve the author name using a custom variable lookup
///
/// The first variable that is set wins, even when its value is empty;
/// `Unknown` only when none is set.
pub fn resolve_username_with<S, F>(vars: &[S], lookup: F) -> String
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    vars.iter()
        .find_map(|name| lookup(name.as_ref()))
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
