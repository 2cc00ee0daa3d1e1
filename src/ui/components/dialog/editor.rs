//! Editor dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_textarea::TextArea;

use super::{Dialog, DialogKind, centered_rect};
use crate::keys;
use crate::plugin::{ActionButton, DialogAction};

/// Build a text area holding `text` exactly
///
/// Splitting on `\n` (not `lines()`) keeps a trailing newline, so joining the
/// lines back gives the original text.
pub(super) fn new_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = if text.is_empty() {
        TextArea::default()
    } else {
        TextArea::new(text.split('\n').map(str::to_string).collect())
    };
    textarea.set_cursor_line_style(Style::default());
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea
}

impl Dialog {
    pub(super) fn handle_editor_key(&mut self, key: KeyEvent) -> Option<DialogAction> {
        let DialogKind::Editor {
            textarea,
            submit,
            cancel,
            ..
        } = &mut self.kind
        else {
            return None;
        };

        // Ctrl+S answers with the submit action and the full text
        if keys::is_submit_key(&key) {
            let button = (*submit)?;
            let text = textarea.lines().join("\n");
            return DialogAction::from_id(button.id, text).ok();
        }

        if key.code == KeyCode::Esc {
            let button = (*cancel)?;
            return DialogAction::from_id(button.id, String::new()).ok();
        }

        // All other keys delegate to textarea (Enter = newline, cursor movement, etc.)
        textarea.input(key);
        None
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn render_editor(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        label: &str,
        textarea: &TextArea<'static>,
        submit: Option<&ActionButton>,
        cancel: Option<&ActionButton>,
    ) {
        let width = (area.width.saturating_mul(4) / 5).max(40).min(area.width);
        let height = (area.height.saturating_mul(7) / 10).max(10).min(area.height);
        let dialog_area = centered_rect(width, height, area);

        // Clear the area behind the dialog
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let [label_area, text_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(label), label_area);
        frame.render_widget(textarea, text_area);
        frame.render_widget(Paragraph::new(build_hint_line(submit, cancel)), hint_area);
    }
}

fn build_hint_line(submit: Option<&ActionButton>, cancel: Option<&ActionButton>) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(button) = submit {
        spans.push(Span::styled("[Ctrl+S]", Style::default().fg(Color::Green)));
        spans.push(Span::raw(format!(" {} ", button.label)));
    }
    if let Some(button) = cancel {
        spans.push(Span::styled("[Esc]", Style::default().fg(Color::Red)));
        spans.push(Span::raw(format!(" {}", button.label)));
    }
    Line::from(spans)
}
