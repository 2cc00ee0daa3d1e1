//! Application state and event plumbing

use std::path::PathBuf;

use crate::changelog::ChangelogError;
use crate::host::{InitGuard, PLUGIN_GUARD};
use crate::plugin::Plugin;

use super::host::TerminalHost;

/// Input mode of the workbench
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Document list navigation
    #[default]
    Normal,
    /// Typing a document path to open or create
    OpenPath,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Documents, dialogs and menu
    pub host: TerminalHost,
    /// The changelog plugin
    pub plugin: Plugin,
    pub input_mode: InputMode,
    /// Path typed in `OpenPath` mode
    pub input_buffer: String,
    /// Error message to display
    pub error_message: Option<String>,
}

impl App {
    /// Start the workbench with the process-wide plugin guard
    ///
    /// The first document is treated as already open when the plugin loads;
    /// the others are opened afterwards.
    pub fn new(plugin: Plugin, documents: Vec<PathBuf>) -> Self {
        Self::with_guard(plugin, documents, &PLUGIN_GUARD)
    }

    pub fn with_guard(plugin: Plugin, documents: Vec<PathBuf>, guard: &InitGuard) -> Self {
        let mut host = TerminalHost::new();
        let mut documents = documents.into_iter();

        if let Some(first) = documents.next() {
            host.adopt_document(first);
        }
        plugin.install(guard, &mut host);
        for path in documents {
            host.open_document(path);
        }

        let mut app = Self {
            running: true,
            host,
            plugin,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            error_message: None,
        };
        app.process_events();
        app
    }

    /// Idle work: detect saves, deliver events, expire notifications
    pub fn tick(&mut self) {
        self.host.poll_saves();
        self.process_events();
        self.host.clear_expired_notification();
    }

    /// Hand queued lifecycle events to the plugin
    pub(crate) fn process_events(&mut self) {
        for event in self.host.take_events() {
            if let Err(err) = self.plugin.handle_event(&mut self.host, event) {
                self.report_error(err);
            }
        }
    }

    pub(crate) fn report_error(&mut self, err: ChangelogError) {
        tracing::warn!(error = %err, "changelog operation failed");
        self.error_message = Some(err.to_string());
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }
}
