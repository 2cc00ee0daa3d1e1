//! Error and notification message components
//!
//! Consistent styling for the error banner and title-bar notifications.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build the error banner line: `[red bg] Error: [/red bg] message`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " Error: ",
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build the notification suffix for the title bar
///
/// With `max_width`, the message is cut to fit and ends in "…". Returns an
/// empty line when not even one character of the message fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    const SEPARATOR: &str = " | ";

    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Success: ", Color::Green),
        NotificationKind::Info => ("Info: ", Color::Cyan),
    };

    let fixed = SEPARATOR.len() + label.len();
    let message_width = notification.message.chars().count() + 1;

    let text = match max_width {
        Some(max) if fixed + message_width > max => {
            // Room for the cut message plus "… "
            let available = max.saturating_sub(fixed + 2);
            if available == 0 {
                return Line::default();
            }
            let cut: String = notification.message.chars().take(available).collect();
            format!("{}… ", cut)
        }
        _ => format!("{} ", notification.message),
    };

    Line::from(vec![
        Span::raw(SEPARATOR),
        Span::styled(label, Style::default().fg(Color::Black).bg(color)),
        Span::styled(text, Style::default().fg(color)),
    ])
}
