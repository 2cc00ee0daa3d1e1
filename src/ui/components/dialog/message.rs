//! Message dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{Dialog, centered_rect};
use crate::plugin::DialogAction;

impl Dialog {
    pub(super) fn handle_message_key(&self, key: KeyEvent) -> Option<DialogAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char(' ') => {
                Some(DialogAction::Close)
            }
            _ => None,
        }
    }

    pub(super) fn render_message(&self, frame: &mut Frame, area: Rect, title: &str, message: &str) {
        let width = 60.min(area.width.saturating_sub(4));
        let message_lines = message.split('\n').count() as u16;
        let height = (message_lines + 6).min(area.height.saturating_sub(2));

        let dialog_area = centered_rect(width, height, area);

        // Clear the area behind the dialog
        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![Line::from("")];
        lines.extend(message.split('\n').map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" OK"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, dialog_area);
    }
}
