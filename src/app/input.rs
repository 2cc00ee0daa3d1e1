//! Input handling for the application

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{App, InputMode};
use crate::host::{Document, Host};
use crate::keys;
use crate::model::Notification;
use crate::plugin::DialogAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // An open dialog takes all input
        if let Some(dialog) = self.host.active_dialog.as_mut() {
            if let Some(action) = dialog.handle_key(key) {
                self.handle_dialog_action(action);
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::OpenPath => self.handle_path_input_key(key),
        }
    }

    /// Forward a dialog answer to the plugin
    ///
    /// Message boxes have no callback and simply close.
    pub(crate) fn handle_dialog_action(&mut self, action: DialogAction) {
        let callback = self
            .host
            .active_dialog
            .as_ref()
            .and_then(|d| d.callback.clone());

        let Some(mut callback) = callback else {
            self.host.close_dialog();
            return;
        };

        if let Err(err) = self
            .plugin
            .handle_action(&mut self.host, &mut callback, action)
        {
            self.report_error(err);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT => self.quit(),
            code if keys::is_move_down(code) => self.host.select_next(),
            code if keys::is_move_up(code) => self.host.select_previous(),
            keys::OPEN_DOCUMENT => {
                self.input_mode = InputMode::OpenPath;
                self.input_buffer.clear();
            }
            keys::PLUGIN_MENU => self.run_menu_item(),
            _ => {}
        }
    }

    fn run_menu_item(&mut self) {
        let Some(item) = self.host.menu_items().first().copied() else {
            return;
        };
        if let Err(err) = self.plugin.handle_menu(&mut self.host, item.action) {
            self.report_error(err);
        }
    }

    fn handle_path_input_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::ENTER => {
                let path = self.input_buffer.trim().to_string();
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                if !path.is_empty() {
                    self.open_document(PathBuf::from(path));
                }
            }
            keys::ESC => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    fn open_document(&mut self, path: PathBuf) {
        let id = self.host.open_document(path);
        if let Some(document) = self.host.document(id) {
            let verb = if document.is_saved() { "Watching" } else { "Waiting for" };
            self.host.notification = Some(Notification::info(format!(
                "{} {}",
                verb,
                document.name()
            )));
        }
        self.process_events();
    }
}
