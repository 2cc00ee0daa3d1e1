//! UI rendering tests using ratatui's TestBackend
//!
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

#[path = "ui/test_dialog.rs"]
mod test_dialog;

#[path = "ui/test_workbench.rs"]
mod test_workbench;
