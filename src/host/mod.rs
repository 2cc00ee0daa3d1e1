//! Host application seam
//!
//! The plugin never talks to a concrete application. A host adapter exposes
//! its documents, delivers [`LifecycleEvent`]s and offers a few UI primitives
//! (dialogs, message boxes, menu items) through the [`Host`] trait.

mod guard;

pub use guard::{InitGuard, InitState, PLUGIN_GUARD};

use std::path::Path;

use crate::plugin::DialogRequest;

/// Host-assigned document handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub usize);

/// A document owned by the host
pub trait Document {
    /// Path of the last save, empty if the document was never saved
    fn saved_path(&self) -> &str;

    /// Base filename of the saved document, used as a dialog title
    fn title(&self) -> String {
        Path::new(self.saved_path())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn is_saved(&self) -> bool {
        !self.saved_path().is_empty()
    }
}

/// Document lifecycle notifications delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A new, never-saved document was created
    Created(DocumentId),
    /// An existing document was opened
    Opened(DocumentId),
    /// A save completed; only delivered for observed documents
    PostSave(DocumentId),
}

impl LifecycleEvent {
    pub fn document(self) -> DocumentId {
        match self {
            Self::Created(id) | Self::Opened(id) | Self::PostSave(id) => id,
        }
    }
}

/// Actions a menu item can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenLogViewer,
}

/// A named entry under a host menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub menu: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

/// Capabilities the plugin needs from its host
///
/// All calls happen on the host's UI thread. `show_dialog` must return
/// immediately; the user's answer comes back later as a dialog action.
pub trait Host {
    type Doc: Document;

    /// The document currently in focus
    fn active_document(&self) -> Option<DocumentId>;

    fn document(&self, id: DocumentId) -> Option<&Self::Doc>;

    /// Start delivering [`LifecycleEvent::PostSave`] for `id`
    fn attach_save_observer(&mut self, id: DocumentId);

    fn register_menu_item(&mut self, item: MenuItem);

    /// Show a dialog without blocking
    fn show_dialog(&mut self, request: DialogRequest);

    /// Close the current dialog and release its state
    fn close_dialog(&mut self);

    /// Show a simple informational message box
    fn message_box(&mut self, message: &str);

    /// Operator-visible confirmation (console, status line)
    fn notify(&mut self, message: &str);
}
