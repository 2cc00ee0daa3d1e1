//! Commit prompt shown after each save

use std::path::{Path, PathBuf};

use super::commands::Effect;
use super::dialog::{ActionButton, DialogCallback, DialogRequest, DialogView};
use crate::changelog::constants::messages;
use crate::changelog::{ChangelogError, LogPathResolver};
use crate::host::Document;

/// Prompt lifecycle: `Idle → Shown → {Submitted | Cancelled} → Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    #[default]
    Idle,
    Shown,
    Submitted,
    Cancelled,
    Closed,
}

impl PromptState {
    fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Shown => "Shown",
            Self::Submitted => "Submitted",
            Self::Cancelled => "Cancelled",
            Self::Closed => "Closed",
        }
    }
}

/// Asks for a change description and appends it to the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPrompt {
    path: PathBuf,
    document_title: String,
    state: PromptState,
}

impl CommitPrompt {
    /// Create a prompt for a saved document
    ///
    /// Returns `None` when the document has no changelog path; such documents
    /// are never prompted.
    pub fn for_document<D: Document + ?Sized>(
        resolver: &LogPathResolver,
        document: &D,
    ) -> Option<Self> {
        let path = resolver.resolve(document)?;
        Some(Self {
            path,
            document_title: document.title(),
            state: PromptState::Idle,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Move to `Shown` and build the dialog for the host
    pub fn show(mut self) -> Result<DialogRequest, ChangelogError> {
        self.transition(PromptState::Idle, PromptState::Shown)?;
        let view = DialogView {
            title: format!("{} - {}", messages::PROMPT_TITLE, self.document_title),
            label: messages::PROMPT_LABEL.to_string(),
            text: String::new(),
            buttons: vec![ActionButton::SKIP, ActionButton::LOG_CHANGE],
        };
        Ok(DialogRequest {
            view,
            callback: DialogCallback::CommitPrompt(self),
        })
    }

    /// Accept `message` (possibly empty) and close
    pub fn submit(&mut self, message: String) -> Result<Vec<Effect>, ChangelogError> {
        self.transition(PromptState::Shown, PromptState::Submitted)?;
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let effects = vec![
            Effect::Append {
                path: self.path.clone(),
                message,
            },
            Effect::Notify(format!("Logged change to {}", file_name)),
        ];
        self.close(effects)
    }

    /// Dismiss without writing
    pub fn cancel(&mut self) -> Result<Vec<Effect>, ChangelogError> {
        self.transition(PromptState::Shown, PromptState::Cancelled)?;
        self.close(Vec::new())
    }

    fn close(&mut self, mut effects: Vec<Effect>) -> Result<Vec<Effect>, ChangelogError> {
        match self.state {
            PromptState::Submitted | PromptState::Cancelled => {
                self.state = PromptState::Closed;
                effects.push(Effect::Close);
                Ok(effects)
            }
            other => Err(invalid(other, PromptState::Closed)),
        }
    }

    fn transition(&mut self, from: PromptState, to: PromptState) -> Result<(), ChangelogError> {
        if self.state != from {
            return Err(invalid(self.state, to));
        }
        self.state = to;
        Ok(())
    }
}

fn invalid(from: PromptState, to: PromptState) -> ChangelogError {
    ChangelogError::InvalidTransition {
        from: from.name(),
        to: to.name(),
    }
}
