//! Keybinding definitions for the terminal workbench
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+S (submit a text dialog)
/// Note: Accept both 's' and 'S' for terminal compatibility
pub fn is_submit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

pub const QUIT: KeyCode = KeyCode::Char('q');

/// Cancel dialog / input
pub const ESC: KeyCode = KeyCode::Esc;

/// Confirm input / dismiss message
pub const ENTER: KeyCode = KeyCode::Enter;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Workbench keys
// =============================================================================

/// Open (or create) a document by path
pub const OPEN_DOCUMENT: KeyCode = KeyCode::Char('o');

/// Key bound to the first registered plugin menu item
pub const PLUGIN_MENU: KeyCode = KeyCode::Char('L');

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_MOVE: KeyHint = KeyHint {
    key: "j/k",
    label: "Select",
    color: Color::Cyan,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "o",
    label: "Open",
    color: Color::Green,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_SUBMIT_INPUT: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

/// Hints for the document list; the menu hint is added by the caller
pub const DOCUMENT_LIST_HINTS: &[KeyHint] = &[HINT_MOVE, HINT_OPEN, HINT_QUIT];

/// Hints while typing a path
pub const INPUT_HINTS: &[KeyHint] = &[HINT_SUBMIT_INPUT, HINT_CANCEL];

/// Hint for a registered menu item
pub fn menu_hint(label: &'static str) -> KeyHint {
    KeyHint {
        key: "L",
        label,
        color: Color::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_submit_key() {
        assert!(is_submit_key(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(is_submit_key(&key(KeyCode::Char('S'), KeyModifiers::CONTROL)));
        assert!(!is_submit_key(&key(KeyCode::Char('s'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_interrupt_key() {
        assert!(is_interrupt_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_move_keys() {
        assert!(is_move_up(KeyCode::Char('k')));
        assert!(is_move_up(KeyCode::Up));
        assert!(is_move_down(KeyCode::Char('j')));
        assert!(is_move_down(KeyCode::Down));
        assert!(!is_move_down(KeyCode::Char('k')));
    }
}
