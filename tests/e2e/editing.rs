//! E2E tests for the editing mode: typing, cursor motion and the menu
//! overlay, driven through raw key events.

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;
use wp::state::Mode;
use wp::Cursor;

#[test]
fn test_typing_splits_and_serializes() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("hi");
    harness.press(KeyCode::Enter);
    harness.type_text("there");

    assert_eq!(
        harness.editor.buffer().serialize_lines(),
        vec!["hi", "there"]
    );
    assert_eq!(harness.editor.buffer().cursor(), Cursor::new(1, 5));
}

#[test]
fn test_backspace_at_line_start_joins() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("abc");
    harness.press(KeyCode::Enter);
    harness.type_text("def");
    // Back to the start of the second line.
    harness.press(KeyCode::Left);
    harness.press(KeyCode::Left);
    harness.press(KeyCode::Left);
    harness.press(KeyCode::Backspace);

    assert_eq!(harness.editor.buffer().serialize_lines(), vec!["abcdef"]);
    assert_eq!(harness.editor.buffer().cursor(), Cursor::new(0, 3));
}

#[test]
fn test_arrow_keys_do_not_wrap() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("ab");
    harness.press(KeyCode::Enter);
    harness.type_text("cd");

    // Left at column 0 stays put.
    harness.press(KeyCode::Left);
    harness.press(KeyCode::Left);
    harness.press(KeyCode::Left);
    assert_eq!(harness.editor.buffer().cursor(), Cursor::new(1, 0));

    // Right at end of line stays put.
    harness.press(KeyCode::Right);
    harness.press(KeyCode::Right);
    harness.press(KeyCode::Right);
    assert_eq!(harness.editor.buffer().cursor(), Cursor::new(1, 2));

    // Down at the last line refuses to move or grow the document.
    harness.press(KeyCode::Down);
    assert_eq!(harness.editor.buffer().cursor().row, 1);
    assert_eq!(harness.editor.buffer().line_count(), 2);
}

#[test]
fn test_escape_opens_menu_and_cancels() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.press(KeyCode::Esc);
    assert!(matches!(harness.editor.mode(), Mode::MenuOpen(_)));

    harness.press(KeyCode::Esc);
    assert!(harness.editor.mode().is_editing());
}

#[test]
fn test_quit_via_menu() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.press(KeyCode::Esc);
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Enter);
    assert!(harness.editor.should_quit());
}

#[test]
fn test_ctrl_q_quits() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.send_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(harness.editor.should_quit());
}

#[test]
fn test_document_stats_extension_from_tools_menu() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("one two three");
    harness.press(KeyCode::Esc);
    // Tools is the last top-level menu; Left wraps to it.
    harness.press(KeyCode::Left);
    harness.press(KeyCode::Enter);

    match harness.editor.mode() {
        Mode::Notice(notice) => {
            assert_eq!(notice.message, "1 lines, 3 words, 13 characters");
        }
        other => panic!("expected stats notice, got {other:?}"),
    }
}
