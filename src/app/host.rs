//! Terminal implementation of the plugin host

use std::collections::VecDeque;
use std::mem;
use std::path::PathBuf;

use crate::host::{Document, DocumentId, Host, LifecycleEvent, MenuItem};
use crate::model::{Notification, WatchedDocument};
use crate::plugin::DialogRequest;
use crate::ui::components::Dialog;

/// Title of message boxes raised by the plugin
const MESSAGE_TITLE: &str = "Changelog";

/// Documents, menu and dialogs of the terminal workbench
///
/// Lifecycle events are queued and handed to the plugin by the app loop, so
/// the plugin always runs between two key presses or ticks.
#[derive(Debug, Default)]
pub struct TerminalHost {
    documents: Vec<WatchedDocument>,
    active: Option<DocumentId>,
    menu_items: Vec<MenuItem>,
    /// Dialog receiving input
    pub active_dialog: Option<Dialog>,
    /// Dialogs shown while another one was open
    queued_dialogs: VecDeque<Dialog>,
    /// Latest confirmation for the title bar
    pub notification: Option<Notification>,
    pending_events: Vec<LifecycleEvent>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[WatchedDocument] {
        &self.documents
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn queued_dialog_count(&self) -> usize {
        self.queued_dialogs.len()
    }

    /// Add a document that was open before the plugin loaded
    ///
    /// No lifecycle event is queued for it.
    pub fn adopt_document(&mut self, path: impl Into<PathBuf>) -> DocumentId {
        let id = self.push_document(WatchedDocument::new(path));
        self.active = Some(id);
        id
    }

    /// Open an existing document or create a new one
    ///
    /// Queues `Opened` when the file exists and `Created` otherwise. A path
    /// that is already watched is only selected.
    pub fn open_document(&mut self, path: impl Into<PathBuf>) -> DocumentId {
        let path = path.into();
        if let Some(index) = self.documents.iter().position(|d| d.target() == path) {
            let id = DocumentId(index);
            self.active = Some(id);
            return id;
        }

        let document = WatchedDocument::new(path);
        let saved = document.is_saved();
        let id = self.push_document(document);
        self.active = Some(id);
        self.pending_events.push(if saved {
            LifecycleEvent::Opened(id)
        } else {
            LifecycleEvent::Created(id)
        });
        id
    }

    pub fn select_next(&mut self) {
        if let Some(DocumentId(index)) = self.active
            && index + 1 < self.documents.len()
        {
            self.active = Some(DocumentId(index + 1));
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(DocumentId(index)) = self.active
            && index > 0
        {
            self.active = Some(DocumentId(index - 1));
        }
    }

    /// Look for saves on disk and queue post-save events for observed documents
    pub fn poll_saves(&mut self) {
        for (index, document) in self.documents.iter_mut().enumerate() {
            if document.detect_save() && document.observed {
                tracing::debug!(path = %document.target().display(), "save detected");
                self.pending_events
                    .push(LifecycleEvent::PostSave(DocumentId(index)));
            }
        }
    }

    /// Drain queued lifecycle events
    pub fn take_events(&mut self) -> Vec<LifecycleEvent> {
        mem::take(&mut self.pending_events)
    }

    pub fn clear_expired_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    fn push_document(&mut self, document: WatchedDocument) -> DocumentId {
        self.documents.push(document);
        DocumentId(self.documents.len() - 1)
    }

    fn push_dialog(&mut self, dialog: Dialog) {
        if self.active_dialog.is_none() {
            self.active_dialog = Some(dialog);
        } else {
            self.queued_dialogs.push_back(dialog);
        }
    }
}

impl Host for TerminalHost {
    type Doc = WatchedDocument;

    fn active_document(&self) -> Option<DocumentId> {
        self.active
    }

    fn document(&self, id: DocumentId) -> Option<&WatchedDocument> {
        self.documents.get(id.0)
    }

    fn attach_save_observer(&mut self, id: DocumentId) {
        if let Some(document) = self.documents.get_mut(id.0) {
            document.observed = true;
        }
    }

    fn register_menu_item(&mut self, item: MenuItem) {
        if !self.menu_items.contains(&item) {
            self.menu_items.push(item);
        }
    }

    fn show_dialog(&mut self, request: DialogRequest) {
        self.push_dialog(Dialog::from_request(request));
    }

    fn close_dialog(&mut self) {
        self.active_dialog = self.queued_dialogs.pop_front();
    }

    fn message_box(&mut self, message: &str) {
        self.push_dialog(Dialog::message(MESSAGE_TITLE, message));
    }

    fn notify(&mut self, message: &str) {
        self.notification = Some(Notification::success(message));
    }
}
