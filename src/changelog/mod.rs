//! Changelog storage layer
//!
//! Path derivation, entry serialization and file access for the per-document
//! changelog. Nothing in here knows about dialogs.

pub mod constants;
mod entry;
mod path;
mod store;

pub use entry::{LogEntry, resolve_username, resolve_username_with};
pub use path::LogPathResolver;
pub use store::LogStore;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while recording or editing a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Document has not been saved yet")]
    UnsavedDocument,

    #[error("No log file at {}", .0.display())]
    LogFileNotFound(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Commit prompt cannot go from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Unknown dialog action: {0}")]
    UnknownAction(String),
}

impl ChangelogError {
    /// Informational errors are shown as a message, not as a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::UnsavedDocument | Self::LogFileNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_informational_errors() {
        assert!(ChangelogError::UnsavedDocument.is_informational());
        assert!(ChangelogError::LogFileNotFound(PathBuf::from("/x")).is_informational());
        assert!(
            !ChangelogError::Io {
                path: PathBuf::from("/x"),
                source: io::Error::other("disk full"),
            }
            .is_informational()
        );
    }

    #[test]
    fn test_io_error_message_includes_path() {
        let err = ChangelogError::Io {
            path: PathBuf::from("/a/house_changelog.txt"),
            source: io::Error::other("denied"),
        };
        assert_eq!(
            err.to_string(),
            "IO error on /a/house_changelog.txt: denied"
        );
    }
}
