//! Plugin configuration

use crate::changelog::constants::{DEFAULT_DOCUMENT_SUFFIX, DEFAULT_IDENTITY_VARS};
use crate::changelog::resolve_username;

/// Settings shared by every component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Suffix token replaced by `_changelog.txt` (e.g. `.skp`)
    pub document_suffix: String,
    /// Environment variables consulted for the author name, in order
    pub identity_vars: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_suffix: DEFAULT_DOCUMENT_SUFFIX.to_string(),
            identity_vars: DEFAULT_IDENTITY_VARS
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.document_suffix = suffix.into();
        self
    }

    /// Replace the identity variables; an empty list keeps the defaults
    pub fn with_identity_vars(mut self, vars: Vec<String>) -> Self {
        if !vars.is_empty() {
            self.identity_vars = vars;
        }
        self
    }

    /// Author name from the current environment
    pub fn author(&self) -> String {
        resolve_username(&self.identity_vars)
    }
}
