//! Dialog components for the terminal host
//!
//! Provides two dialog shapes:
//! - Message dialog: informational text, dismissed with Enter/Esc
//! - Editor dialog: multi-line text field with a submit and a cancel action,
//!   built from a plugin [`DialogRequest`]

mod editor;
mod message;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tui_textarea::TextArea;

use crate::plugin::{ActionButton, DialogAction, DialogCallback, DialogRequest};

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Informational message box
    Message { title: String, message: String },
    /// Multi-line text editor with two actions
    Editor {
        title: String,
        label: String,
        textarea: TextArea<'static>,
        submit: Option<ActionButton>,
        cancel: Option<ActionButton>,
    },
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    /// Dialog kind and content
    pub kind: DialogKind,
    /// What the answer applies to (`None` for message boxes)
    pub callback: Option<DialogCallback>,
}

impl Dialog {
    /// Create a message box
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Message {
                title: title.into(),
                message: message.into(),
            },
            callback: None,
        }
    }

    /// Create an editor dialog from a plugin request
    pub fn from_request(request: DialogRequest) -> Self {
        let DialogRequest { view, callback } = request;
        let submit = view.submit_button().copied();
        let cancel = view.cancel_button().copied();
        Self {
            kind: DialogKind::Editor {
                title: view.title,
                label: view.label,
                textarea: editor::new_textarea(&view.text),
                submit,
                cancel,
            },
            callback: Some(callback),
        }
    }

    /// Current text of an editor dialog
    pub fn text(&self) -> Option<String> {
        match &self.kind {
            DialogKind::Editor { textarea, .. } => Some(textarea.lines().join("\n")),
            DialogKind::Message { .. } => None,
        }
    }

    /// Handle key input, returns Some(action) when the user answered
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogAction> {
        match self.kind {
            DialogKind::Message { .. } => self.handle_message_key(key),
            DialogKind::Editor { .. } => self.handle_editor_key(key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Message { title, message } => {
                self.render_message(frame, area, title, message)
            }
            DialogKind::Editor {
                title,
                label,
                textarea,
                submit,
                cancel,
            } => self.render_editor(
                frame,
                area,
                title,
                label,
                textarea,
                submit.as_ref(),
                cancel.as_ref(),
            ),
        }
    }
}

/// Calculate a centered rectangle within the given area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
