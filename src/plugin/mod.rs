//! Save-triggered changelog plugin
//!
//! Glues the changelog layer to a [`Host`]:
//! - [`LifecycleBinder`]: reacts to document lifecycle events
//! - [`CommitPrompt`]: asks for a message after each save
//! - [`LogViewer`]: shows the changelog for editing
//! - [`commands`]: turns dialog answers into effects and performs them

mod binder;
pub mod commands;
mod dialog;
mod prompt;
mod viewer;

pub use binder::{Binding, LifecycleBinder, VIEW_CHANGELOG_ITEM};
pub use commands::{Effect, apply, dispatch};
pub use dialog::{
    ActionButton, ActionRole, DialogAction, DialogCallback, DialogRequest, DialogView, actions,
};
pub use prompt::{CommitPrompt, PromptState};
pub use viewer::LogViewer;

use crate::changelog::constants::messages;
use crate::changelog::{ChangelogError, LogPathResolver, LogStore};
use crate::config::Config;
use crate::host::{DocumentId, Host, InitGuard, LifecycleEvent, MenuAction};

/// The plugin, independent of any concrete host
#[derive(Debug, Clone)]
pub struct Plugin {
    config: Config,
    resolver: LogPathResolver,
    store: LogStore,
    binder: LifecycleBinder,
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Plugin {
    pub fn new(config: Config) -> Self {
        Self {
            resolver: LogPathResolver::new(config.document_suffix.clone()),
            store: LogStore::new(),
            binder: LifecycleBinder,
            config,
        }
    }

    pub fn resolver(&self) -> &LogPathResolver {
        &self.resolver
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Hook into the host; a no-op after the first call on `guard`
    pub fn install<H: Host>(&self, guard: &InitGuard, host: &mut H) -> bool {
        self.binder.install(guard, host)
    }

    /// React to a lifecycle event
    pub fn handle_event<H: Host>(
        &self,
        host: &mut H,
        event: LifecycleEvent,
    ) -> Result<(), ChangelogError> {
        match self.binder.route(event) {
            Binding::AttachObserver(id) => {
                host.attach_save_observer(id);
                tracing::debug!(document = id.0, "save observer attached");
                Ok(())
            }
            Binding::Prompt(id) => self.prompt(host, id).map(|_| ()),
        }
    }

    /// Show the commit prompt for a just-saved document
    ///
    /// Returns whether a prompt was shown. Unsaved documents are skipped.
    pub fn prompt<H: Host>(&self, host: &mut H, id: DocumentId) -> Result<bool, ChangelogError> {
        let prompt = host
            .document(id)
            .and_then(|doc| CommitPrompt::for_document(&self.resolver, doc));
        let Some(prompt) = prompt else {
            tracing::debug!(document = id.0, "no changelog path, not prompting");
            return Ok(false);
        };

        tracing::debug!(path = %prompt.path().display(), "showing commit prompt");
        host.show_dialog(prompt.show()?);
        Ok(true)
    }

    pub fn handle_menu<H: Host>(
        &self,
        host: &mut H,
        action: MenuAction,
    ) -> Result<(), ChangelogError> {
        match action {
            MenuAction::OpenLogViewer => self.open_viewer(host),
        }
    }

    /// Open the viewer for the active document
    ///
    /// Without a changelog an informational message is shown instead.
    pub fn open_viewer<H: Host>(&self, host: &mut H) -> Result<(), ChangelogError> {
        let viewer = host
            .active_document()
            .and_then(|id| host.document(id))
            .ok_or(ChangelogError::UnsavedDocument)
            .and_then(|doc| LogViewer::open(&self.resolver, &self.store, doc));

        match viewer {
            Ok(viewer) => {
                host.show_dialog(viewer.request());
                Ok(())
            }
            Err(err) if err.is_informational() => {
                tracing::debug!(reason = %err, "no changelog to view");
                host.message_box(messages::NO_LOG_FILE);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Handle the user's answer to a dialog
    pub fn handle_action<H: Host>(
        &self,
        host: &mut H,
        callback: &mut DialogCallback,
        action: DialogAction,
    ) -> Result<(), ChangelogError> {
        let effects = dispatch(callback, action)?;
        apply(effects, &self.store, &self.config.author(), host)
    }
}
