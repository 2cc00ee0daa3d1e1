//! Rendering tests for plugin dialogs

use ratatui::{Terminal, backend::TestBackend};

use savelog::changelog::LogPathResolver;
use savelog::host::Document;
use savelog::plugin::{CommitPrompt, DialogCallback, DialogRequest, DialogView, actions};
use savelog::ui::components::Dialog;

struct SavedDoc(&'static str);

impl Document for SavedDoc {
    fn saved_path(&self) -> &str {
        self.0
    }
}

fn draw(dialog: &Dialog, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            dialog.render(frame, frame.area());
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_message_dialog() {
    let dialog = Dialog::message(
        "Changelog",
        "No log file found. Save the model to start a log.",
    );
    let screen = draw(&dialog, 80, 12);

    assert!(screen.contains("Changelog"));
    assert!(screen.contains("No log file found."));
}

#[test]
fn test_commit_prompt_dialog() {
    let prompt = CommitPrompt::for_document(
        &LogPathResolver::default(),
        &SavedDoc("/models/house.skp"),
    )
    .unwrap();
    let dialog = Dialog::from_request(prompt.show().unwrap());
    let screen = draw(&dialog, 80, 20);

    assert!(screen.contains("Log Changes - house.skp"));
    assert!(screen.contains("Describe what changed in this save:"));
    assert!(screen.contains("Log Change"));
    assert!(screen.contains("Skip"));
}

#[test]
fn test_viewer_dialog_shows_content() {
    let view = DialogView {
        title: "house.skp".to_string(),
        label: "Changelog: /models/house_changelog.txt".to_string(),
        text: "\n[2024-03-05 14:07:09] User: alice - Save Commit:\n- Roof".to_string(),
        buttons: vec![
            savelog::plugin::ActionButton::CLOSE,
            savelog::plugin::ActionButton::SAVE_EDITS,
        ],
    };
    let request = DialogRequest {
        view,
        callback: DialogCallback::LogViewer {
            path: "/models/house_changelog.txt".into(),
        },
    };
    let dialog = Dialog::from_request(request);
    let screen = draw(&dialog, 100, 24);

    assert!(screen.contains("house.skp"));
    assert!(screen.contains("User: alice - Save Commit:"));
    assert!(screen.contains("- Roof"));
    assert!(screen.contains("Save Edits"));
    assert_eq!(actions::SAVE_EDITS, "save_edits");
}

#[test]
fn test_dialog_fits_small_terminal() {
    let dialog = Dialog::message("Changelog", "Changelog saved.");
    let screen = draw(&dialog, 30, 6);
    assert!(screen.contains("Changelog"));
}
