//! Rendering tests for the workbench screen

use std::path::PathBuf;

use ratatui::{Terminal, backend::TestBackend};

use savelog::Config;
use savelog::app::App;
use savelog::host::InitGuard;
use savelog::plugin::Plugin;

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

fn start(documents: Vec<PathBuf>) -> App {
    App::with_guard(Plugin::new(Config::default()), documents, &InitGuard::new())
}

#[test]
fn test_empty_workbench() {
    let app = start(Vec::new());
    let screen = draw(&app);

    assert!(screen.contains("savelog"));
    assert!(screen.contains("View Changelog"));
}

#[test]
fn test_unsaved_document_listed() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = start(vec![dir.path().join("draft.skp")]);
    let screen = draw(&app);

    assert!(screen.contains("draft.skp"));
    assert!(screen.contains("not saved"));
}

#[test]
fn test_saved_document_listed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("house.skp");
    std::fs::write(&path, "model").unwrap();
    let app = start(vec![path]);
    let screen = draw(&app);

    assert!(screen.contains("house.skp"));
    assert!(screen.contains("[saved]"));
}

#[test]
fn test_open_path_input_bar() {
    let mut app = start(Vec::new());
    app.on_key_event(crossterm::event::KeyEvent::from(
        crossterm::event::KeyCode::Char('o'),
    ));
    let screen = draw(&app);

    assert_eq!(app.input_mode, savelog::app::InputMode::OpenPath);
    assert!(screen.contains("Cancel") || screen.contains("Esc"));
}
