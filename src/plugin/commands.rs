//! Dialog command dispatch
//!
//! `dispatch` decides what an answer means and returns effects; `apply` is the
//! only place that performs them.

use std::path::PathBuf;

use super::dialog::{DialogAction, DialogCallback};
use super::viewer;
use crate::changelog::{ChangelogError, LogEntry, LogStore};
use crate::host::Host;

/// Something to do in response to a dialog answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a new entry with `message`
    Append { path: PathBuf, message: String },
    /// Replace the changelog with `content`
    Overwrite { path: PathBuf, content: String },
    /// Show a message box
    Message(String),
    /// Operator-visible confirmation
    Notify(String),
    /// Close the dialog
    Close,
}

/// Decide the effects of `action` on the dialog identified by `callback`
pub fn dispatch(
    callback: &mut DialogCallback,
    action: DialogAction,
) -> Result<Vec<Effect>, ChangelogError> {
    match (callback, action) {
        (DialogCallback::CommitPrompt(prompt), DialogAction::LogChange(message)) => {
            prompt.submit(message)
        }
        (DialogCallback::CommitPrompt(prompt), DialogAction::Skip | DialogAction::Close) => {
            prompt.cancel()
        }
        (DialogCallback::LogViewer { path }, DialogAction::SaveEdits(text)) => {
            Ok(viewer::save_edits(path, text))
        }
        (DialogCallback::LogViewer { .. }, DialogAction::Close | DialogAction::Skip) => {
            Ok(vec![Effect::Close])
        }
        (callback, action) => Err(ChangelogError::UnknownAction(format!(
            "{} on {}",
            action.id(),
            callback.name()
        ))),
    }
}

/// Perform `effects` in order
///
/// Stops at the first failure. A failed append still runs the pending
/// `Close`; a failed overwrite leaves the viewer open with the edited text.
pub fn apply<H: Host>(
    effects: Vec<Effect>,
    store: &LogStore,
    author: &str,
    host: &mut H,
) -> Result<(), ChangelogError> {
    let mut effects = effects.into_iter();
    while let Some(effect) = effects.next() {
        let keeps_dialog = matches!(effect, Effect::Overwrite { .. });
        if let Err(err) = perform(effect, store, author, host) {
            if !keeps_dialog && effects.any(|e| e == Effect::Close) {
                host.close_dialog();
            }
            return Err(err);
        }
    }
    Ok(())
}

fn perform<H: Host>(
    effect: Effect,
    store: &LogStore,
    author: &str,
    host: &mut H,
) -> Result<(), ChangelogError> {
    match effect {
        Effect::Append { path, message } => {
            store.append(&path, &LogEntry::now(author, message))?;
            tracing::info!(path = %path.display(), author, "change logged");
        }
        Effect::Overwrite { path, content } => {
            store.overwrite(&path, &content)?;
            tracing::info!(path = %path.display(), "changelog edited");
        }
        Effect::Message(message) => host.message_box(&message),
        Effect::Notify(message) => host.notify(&message),
        Effect::Close => host.close_dialog(),
    }
    Ok(())
}
