//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render key hints on the last row of the screen
pub fn render_status_bar(frame: &mut Frame, hints: &[KeyHint]) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(build_status_bar(hints)), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_build_status_bar() {
        let line = build_status_bar(&[keys::HINT_OPEN, keys::HINT_QUIT]);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, " [o] Open ");
        assert_eq!(line.spans[2].content, " [q] Quit ");
    }

    #[test]
    fn test_build_status_bar_empty() {
        assert!(build_status_bar(&[]).spans.is_empty());
    }
}
