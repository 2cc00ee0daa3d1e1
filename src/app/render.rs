//! Rendering logic for the application

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, InputMode};
use crate::host::{Document, DocumentId, Host};
use crate::keys::{self, KeyHint};
use crate::model::WatchedDocument;
use crate::ui::components::{self, build_notification_title};
use crate::ui::widgets::{render_error_banner, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let input_height = if self.input_mode == InputMode::OpenPath {
            3
        } else {
            0
        };
        let [list_area, input_area, _status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_documents(frame, list_area);

        if self.input_mode == InputMode::OpenPath {
            self.render_input_bar(frame, input_area);
        }

        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        render_status_bar(frame, &self.current_hints());

        // Render dialog on top of everything
        if let Some(ref dialog) = self.host.active_dialog {
            dialog.render(frame, area);
        }
    }

    /// Key hints for the current mode, including registered menu items
    pub fn current_hints(&self) -> Vec<KeyHint> {
        match self.input_mode {
            InputMode::OpenPath => keys::INPUT_HINTS.to_vec(),
            InputMode::Normal => {
                let mut hints = keys::DOCUMENT_LIST_HINTS.to_vec();
                // Only the first item is bound to a key
                if let Some(item) = self.host.menu_items().first() {
                    hints.insert(hints.len() - 1, keys::menu_hint(item.label));
                }
                hints
            }
        }
    }

    fn render_documents(&self, frame: &mut Frame, area: Rect) {
        let mut title = vec![Span::raw(" savelog ").bold().cyan()];
        if let Some(notification) = self.host.notification.as_ref().filter(|n| !n.is_expired()) {
            let room = (area.width as usize).saturating_sub(12);
            title.extend(build_notification_title(notification, Some(room)).spans);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title));

        let documents = self.host.documents();
        if documents.is_empty() {
            frame.render_widget(components::no_documents_state().block(block), area);
            return;
        }

        let active = self.host.active_document();
        let lines: Vec<Line> = documents
            .iter()
            .enumerate()
            .map(|(index, document)| {
                self.document_line(document, active == Some(DocumentId(index)))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn document_line(&self, document: &WatchedDocument, selected: bool) -> Line<'static> {
        let marker = if selected { "> " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let (state, state_color) = if document.is_saved() {
            ("saved", Color::Green)
        } else {
            ("not saved", Color::Yellow)
        };

        let log = match self.plugin.resolver().resolve(document) {
            Some(path) if self.plugin.store().exists(&path) => {
                format!("log: {}", file_name(&path))
            }
            Some(_) => "log: none yet".to_string(),
            None => "no log".to_string(),
        };

        let mut spans = vec![
            Span::styled(format!("{}{}", marker, document.name()), name_style),
            Span::raw("  "),
            Span::styled(format!("[{}]", state), Style::default().fg(state_color)),
            Span::raw("  "),
            Span::styled(log, Style::default().fg(Color::DarkGray)),
        ];
        if document.is_observed() {
            spans.push(Span::styled("  watching", Style::default().fg(Color::Magenta)));
        }
        Line::from(spans)
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(format!("{}_", self.input_buffer)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Open document (path) ")
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(input, area);
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
