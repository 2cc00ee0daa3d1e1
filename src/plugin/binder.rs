//! Lifecycle wiring between the host and the plugin

use crate::changelog::constants::menu;
use crate::host::{DocumentId, Host, InitGuard, LifecycleEvent, MenuAction, MenuItem};

/// Menu entry that opens the log viewer
pub const VIEW_CHANGELOG_ITEM: MenuItem = MenuItem {
    menu: menu::PLUGINS,
    label: menu::VIEW_CHANGELOG,
    action: MenuAction::OpenLogViewer,
};

/// What a lifecycle event asks the plugin to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Watch the document for saves
    AttachObserver(DocumentId),
    /// Ask for a commit message
    Prompt(DocumentId),
}

/// Subscribes to host lifecycle events
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleBinder;

impl LifecycleBinder {
    /// Attach to the active document and register the menu item
    ///
    /// Runs at most once per `guard`. The host does not replay lifecycle
    /// events for a document that was already open, so the active one is
    /// attached explicitly here.
    pub fn install<H: Host>(&self, guard: &InitGuard, host: &mut H) -> bool {
        if !guard.try_initialize() {
            tracing::debug!("plugin already installed, skipping");
            return false;
        }

        if let Some(id) = host.active_document() {
            host.attach_save_observer(id);
            tracing::debug!(document = id.0, "observing active document");
        }
        host.register_menu_item(VIEW_CHANGELOG_ITEM);
        tracing::info!("changelog plugin installed");
        true
    }

    pub fn route(&self, event: LifecycleEvent) -> Binding {
        match event {
            LifecycleEvent::Created(id) | LifecycleEvent::Opened(id) => Binding::AttachObserver(id),
            LifecycleEvent::PostSave(id) => Binding::Prompt(id),
        }
    }
}
