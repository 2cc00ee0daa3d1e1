//! Changelog constants
//!
//! Centralized definitions for file naming, entry layout and user-facing text.

/// Replacement for the document suffix when deriving the changelog path
pub const CHANGELOG_SUFFIX: &str = "_changelog.txt";

/// Document suffix token used when none is configured
pub const DEFAULT_DOCUMENT_SUFFIX: &str = ".skp";

/// Author recorded when no identity variable is set
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Identity variables, checked in order
pub const DEFAULT_IDENTITY_VARS: &[&str] = &["USERNAME", "USER", "LOGNAME"];

/// Entry layout
pub mod entry {
    /// Timestamp format (`chrono` strftime syntax)
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    /// Closes every entry block
    pub const SEPARATOR: &str = "----------------------------------------";
    /// Trailer after the author name on the header line
    pub const HEADER_TRAILER: &str = " - Save Commit:";
}

/// Menu registration
pub mod menu {
    pub const PLUGINS: &str = "Plugins";
    pub const VIEW_CHANGELOG: &str = "View Changelog";
}

/// Messages shown to the user
pub mod messages {
    pub const NO_LOG_FILE: &str = "No log file found. Save the model to start a log.";
    pub const CHANGELOG_SAVED: &str = "Changelog saved.";
    pub const PROMPT_TITLE: &str = "Log Changes";
    pub const PROMPT_LABEL: &str = "Describe what changed in this save:";
}
