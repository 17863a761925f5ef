//! Render smoke tests against the in-memory terminal: chrome, overlays and
//! document text all end up in the frame.

use crate::common::harness::EditorTestHarness;
use crossterm::event::KeyCode;
use tempfile::TempDir;

#[test]
fn test_frame_shows_menu_bar_text_and_status() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("hello");
    harness.render();
    let screen = harness.screen_to_string();

    assert!(screen.contains("File"), "menu bar should list File");
    assert!(screen.contains("Help"), "menu bar should list Help");
    assert!(screen.contains("hello"), "document text should render");
    assert!(
        screen.contains("Ln 1 Pos 6"),
        "status bar should show 1-based position, got:\n{screen}"
    );
    assert!(
        screen.contains("unknown*"),
        "status bar should mark an unsaved unnamed document"
    );
}

#[test]
fn test_menu_dropdown_renders_entries() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.press(KeyCode::Esc);
    harness.render();
    let screen = harness.screen_to_string();

    assert!(screen.contains("Save As..."));
    assert!(screen.contains("Open..."));
    assert!(screen.contains("Quit"));
}

#[test]
fn test_prompt_overlay_renders_title_and_input() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.press(KeyCode::F(1));
    harness.type_text("memo.txt");
    harness.render();
    let screen = harness.screen_to_string();

    assert!(screen.contains("Enter filename:"));
    assert!(screen.contains("memo.txt"));
}

#[test]
fn test_notice_overlay_renders_message() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.editor.open_file("nope.txt");
    harness.render();
    let screen = harness.screen_to_string();

    assert!(
        screen.contains("File does not exist: nope.txt"),
        "got:\n{screen}"
    );
}

#[test]
fn test_file_select_overlay_lists_candidates() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("alpha.txt"), "a").unwrap();
    std::fs::write(temp_dir.path().join("beta.txt"), "b").unwrap();

    let mut harness = EditorTestHarness::new(temp_dir.path());
    harness.press(KeyCode::F(2));
    harness.render();
    let screen = harness.screen_to_string();

    assert!(screen.contains("Open document"));
    assert!(screen.contains("alpha.txt"));
    assert!(screen.contains("beta.txt"));
}

#[test]
fn test_long_document_scrolls_to_cursor() {
    let temp_dir = TempDir::new().unwrap();
    // 10-row terminal: 1 menu + 8 text rows + 1 status.
    let mut harness = EditorTestHarness::with_size(40, 10, temp_dir.path());

    for i in 0..20 {
        harness.type_text(&format!("line {i}"));
        if i < 19 {
            harness.press(KeyCode::Enter);
        }
    }
    harness.render();
    let screen = harness.screen_to_string();

    assert!(
        screen.contains("line 19"),
        "cursor line should be visible, got:\n{screen}"
    );
    assert!(
        !screen.contains("line 0"),
        "scrolled-off top should not render"
    );
}
