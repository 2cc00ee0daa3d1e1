//! Dialog view models and actions
//!
//! A dialog is described by a [`DialogView`] (what to show) and a
//! [`DialogCallback`] (what the answer is for). Hosts render the view however
//! they like and report the user's choice back as a [`DialogAction`].

use std::path::PathBuf;

use super::prompt::CommitPrompt;
use crate::changelog::ChangelogError;

/// Action identifiers shared with hosts that dispatch by name
pub mod actions {
    pub const SKIP: &str = "skip";
    pub const LOG_CHANGE: &str = "log_change";
    pub const SAVE_EDITS: &str = "save_edits";
    pub const CLOSE: &str = "close";
}

/// How a button behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    /// Sends the edited text as payload
    Submit,
    /// Sends no payload
    Cancel,
}

/// A button on a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub id: &'static str,
    pub label: &'static str,
    pub role: ActionRole,
}

impl ActionButton {
    pub const SKIP: Self = Self {
        id: actions::SKIP,
        label: "Skip",
        role: ActionRole::Cancel,
    };
    pub const LOG_CHANGE: Self = Self {
        id: actions::LOG_CHANGE,
        label: "Log Change",
        role: ActionRole::Submit,
    };
    pub const CLOSE: Self = Self {
        id: actions::CLOSE,
        label: "Close",
        role: ActionRole::Cancel,
    };
    pub const SAVE_EDITS: Self = Self {
        id: actions::SAVE_EDITS,
        label: "Save Edits",
        role: ActionRole::Submit,
    };
}

/// Typed dialog content, free of any markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    /// Line shown above the text field
    pub label: String,
    /// Initial content of the multi-line text field
    pub text: String,
    pub buttons: Vec<ActionButton>,
}

impl DialogView {
    pub fn submit_button(&self) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.role == ActionRole::Submit)
    }

    pub fn cancel_button(&self) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.role == ActionRole::Cancel)
    }
}

/// What a dialog's answer applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCallback {
    /// Commit message for a save
    CommitPrompt(CommitPrompt),
    /// Edits to the changelog at `path`
    LogViewer { path: PathBuf },
}

impl DialogCallback {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CommitPrompt(_) => "commit prompt",
            Self::LogViewer { .. } => "log viewer",
        }
    }
}

/// A dialog for the host to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub view: DialogView,
    pub callback: DialogCallback,
}

/// User's answer to a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Skip,
    LogChange(String),
    SaveEdits(String),
    Close,
}

impl DialogAction {
    /// Build an action from a named host callback and its string payload
    pub fn from_id(id: &str, payload: impl Into<String>) -> Result<Self, ChangelogError> {
        match id {
            actions::SKIP => Ok(Self::Skip),
            actions::LOG_CHANGE => Ok(Self::LogChange(payload.into())),
            actions::SAVE_EDITS => Ok(Self::SaveEdits(payload.into())),
            actions::CLOSE => Ok(Self::Close),
            other => Err(ChangelogError::UnknownAction(other.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Skip => actions::SKIP,
            Self::LogChange(_) => actions::LOG_CHANGE,
            Self::SaveEdits(_) => actions::SAVE_EDITS,
            Self::Close => actions::CLOSE,
        }
    }
}
