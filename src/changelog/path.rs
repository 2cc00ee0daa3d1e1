//! Changelog path derivation

use std::path::PathBuf;

use super::constants::{CHANGELOG_SUFFIX, DEFAULT_DOCUMENT_SUFFIX};
use crate::host::Document;

/// Derives the changelog file path from a document's saved path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPathResolver {
    /// Suffix token replaced by [`CHANGELOG_SUFFIX`]
    suffix: String,
}

impl Default for LogPathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_SUFFIX)
    }
}

impl LogPathResolver {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Resolve the changelog path for a document
    ///
    /// Returns `None` for documents that were never saved.
    pub fn resolve<D: Document + ?Sized>(&self, document: &D) -> Option<PathBuf> {
        self.resolve_path(document.saved_path())
    }

    /// Resolve the changelog path for a raw saved path
    ///
    /// The first occurrence of the suffix token anywhere in the path is
    /// replaced, so `/proj.skp.d/house.skp` maps to
    /// `/proj_changelog.txt.d/house.skp`. Paths without the token have no
    /// changelog.
    pub fn resolve_path(&self, saved_path: &str) -> Option<PathBuf> {
        if saved_path.is_empty() || self.suffix.is_empty() || !saved_path.contains(&self.suffix) {
            return None;
        }
        Some(PathBuf::from(saved_path.replacen(
            &self.suffix,
            CHANGELOG_SUFFIX,
            1,
        )))
    }
}
