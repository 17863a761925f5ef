//! E2E tests for save/load flows: the filename prompt, the file selector
//! and the failure notices.

use crate::common::harness::EditorTestHarness;
use crossterm::event::KeyCode;
use std::fs;
use tempfile::TempDir;
use wp::state::Mode;

#[test]
fn test_save_prompt_writes_file_and_sets_filename() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("x");
    harness.press(KeyCode::F(1));
    assert!(matches!(harness.editor.mode(), Mode::TextPrompt(_)));

    harness.type_text("t.txt");
    harness.press(KeyCode::Enter);

    assert!(harness.editor.mode().is_editing());
    assert_eq!(harness.editor.filename(), Some("t.txt"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("t.txt")).unwrap(),
        "x"
    );
}

#[test]
fn test_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();

    // Save a document in one session...
    let mut harness = EditorTestHarness::new(temp_dir.path());
    harness.type_text("x");
    harness.press(KeyCode::F(1));
    harness.type_text("t.txt");
    harness.press(KeyCode::Enter);

    // ...and load it through the selector in a fresh one.
    let mut harness = EditorTestHarness::new(temp_dir.path());
    harness.press(KeyCode::F(2));
    assert!(matches!(harness.editor.mode(), Mode::FileSelect(_)));
    harness.press(KeyCode::Enter);

    assert!(harness.editor.mode().is_editing());
    assert_eq!(harness.editor.buffer().serialize_lines(), vec!["x"]);
    assert_eq!(harness.editor.filename(), Some("t.txt"));
}

#[test]
fn test_multiline_round_trip_preserves_lines() {
    let temp_dir = TempDir::new().unwrap();

    let mut harness = EditorTestHarness::new(temp_dir.path());
    harness.type_text("first");
    harness.press(KeyCode::Enter);
    harness.press(KeyCode::Enter);
    harness.type_text("third");
    harness.press(KeyCode::F(1));
    harness.type_text("doc.txt");
    harness.press(KeyCode::Enter);

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("doc.txt")).unwrap(),
        "first\n\nthird"
    );

    let mut harness = EditorTestHarness::new(temp_dir.path());
    harness.editor.open_file("doc.txt");
    assert_eq!(
        harness.editor.buffer().serialize_lines(),
        vec!["first", "", "third"]
    );
}

#[test]
fn test_load_missing_file_keeps_document() {
    let temp_dir = TempDir::new().unwrap();
    let mut harness = EditorTestHarness::new(temp_dir.path());

    harness.type_text("unsaved work");
    harness.editor.open_file("missing.txt");

    assert!(matches!(harness.editor.mode(), Mode::Notice(_)));
    assert_eq!(
        harness.editor.buffer().serialize_lines(),
        vec!["unsaved work"]
    );

    // Any key dismisses the notice and editing resumes.
    harness.press(KeyCode::Char(' '));
    assert!(harness.editor.mode().is_editing());
}

#[test]
fn test_file_select_escape_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "disk").unwrap();

    let mut harness = EditorTestHarness::new(temp_dir.path());
    harness.type_text("mine");
    harness.press(KeyCode::F(2));
    harness.press(KeyCode::Esc);

    assert!(harness.editor.mode().is_editing());
    assert_eq!(harness.editor.buffer().serialize_lines(), vec!["mine"]);
    assert_eq!(harness.editor.filename(), None);
}

#[test]
fn test_empty_filename_rejected_without_write() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("docs");
    let mut harness = EditorTestHarness::new(&root);

    harness.press(KeyCode::F(1));
    harness.press(KeyCode::Enter);

    assert!(matches!(harness.editor.mode(), Mode::Notice(_)));
    assert!(!root.exists());
}

#[test]
fn test_save_creates_root_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("deep").join("docs");
    let mut harness = EditorTestHarness::new(&root);

    harness.type_text("content");
    harness.press(KeyCode::F(1));
    harness.type_text("new.txt");
    harness.press(KeyCode::Enter);

    assert_eq!(fs::read_to_string(root.join("new.txt")).unwrap(), "content");
}
