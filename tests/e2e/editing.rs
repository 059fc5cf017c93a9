use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_delete_inclusive_range() {
    let mut harness = EditorTestHarness::with_content(80, 24, "hello world").unwrap();

    // From 'h' through 'w'
    harness.type_text("dhw").unwrap();

    assert!(harness.editor().mode().is_normal());
    harness.assert_buffer_content("orld");
    assert_eq!(harness.get_row_text(0), "orld");
}

#[test]
fn test_delete_with_reversed_targets() {
    let mut harness = EditorTestHarness::with_content(80, 24, "hello world").unwrap();

    harness.type_text("dwh").unwrap();
    harness.assert_buffer_content("orld");
}

#[test]
fn test_delete_single_byte() {
    let mut harness = EditorTestHarness::with_content(80, 24, "abc").unwrap();

    harness.type_text("dbb").unwrap();
    harness.assert_buffer_content("ac");
}

#[test]
fn test_delete_through_last_byte() {
    let mut harness = EditorTestHarness::with_content(80, 24, "abc").unwrap();

    harness.type_text("dbc").unwrap();
    harness.assert_buffer_content("a");
}

#[test]
fn test_delete_in_empty_document_is_noop() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.type_text("d").unwrap();
    assert!(harness.editor().mode().is_normal());
    harness.assert_buffer_content("");
}

#[test]
fn test_failed_second_target_keeps_document() {
    let mut harness = EditorTestHarness::with_content(80, 24, "abc").unwrap();

    harness.type_text("daz").unwrap();
    assert!(harness.editor().mode().is_normal());
    harness.assert_buffer_content("abc");
}

#[test]
fn test_change_replaces_range_and_writes() {
    let mut harness = EditorTestHarness::with_content(80, 24, "one two three").unwrap();

    // 't' at 4 and 8: label 'a'; then 'o' at 0 and 6: label 'b'
    harness.type_text("cta").unwrap();
    harness.type_text("ob").unwrap();
    assert!(harness.editor().mode().is_insert());
    harness.assert_buffer_content("one  three");

    harness.type_text("2").unwrap();
    harness.send_ctrl('d').unwrap();
    harness.type_text("w").unwrap();

    assert_eq!(harness.file_content(), Some(b"one 2 three".to_vec()));
}

#[test]
fn test_append_after_last_byte() {
    let mut harness = EditorTestHarness::with_content(80, 24, "abc").unwrap();

    harness.type_text("acd").unwrap();
    harness.assert_buffer_content("abcd");
}

#[test]
fn test_insert_newline_and_tab() {
    let mut harness = EditorTestHarness::with_content(80, 24, "ab").unwrap();

    harness.type_text("ib").unwrap();
    harness.type_text("\n\t").unwrap();

    harness.assert_buffer_content("a\n\tb");
    assert_eq!(harness.get_row_text(0), "a");
    assert_eq!(harness.get_row_text(1), " b");
}

#[test]
fn test_backspace_in_insert_mode() {
    let mut harness = EditorTestHarness::with_content(80, 24, "abc").unwrap();

    harness.type_text("ic").unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("ac");

    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("c");
    assert_eq!(harness.editor().insert_point(), Some(0));
}

#[test]
fn test_leave_insert_mode_keys() {
    for (code, modifiers) in [
        (KeyCode::Char('d'), KeyModifiers::CONTROL),
        (KeyCode::Char('c'), KeyModifiers::CONTROL),
        (KeyCode::Esc, KeyModifiers::NONE),
    ] {
        let mut harness = EditorTestHarness::with_content(80, 24, "abc").unwrap();
        harness.type_text("ia").unwrap();
        harness.send_key(code, modifiers).unwrap();
        assert!(harness.editor().mode().is_normal(), "{code:?} {modifiers:?}");

        // Command letters are commands again
        harness.type_text("q").unwrap();
        assert!(harness.should_quit());
        harness.assert_buffer_content("abc");
    }
}

#[test]
fn test_insert_many_bytes_grows_buffer() {
    let mut config = hunt::config::Config::default();
    config.editor.initial_capacity = 4;
    let mut harness = EditorTestHarness::with_config(80, 24, config, None).unwrap();

    let text = "the quick brown fox jumps over the lazy dog";
    harness.type_text("i").unwrap();
    harness.type_text(text).unwrap();
    harness.send_ctrl('d').unwrap();

    harness.assert_buffer_content(text);
    harness.type_text("w").unwrap();
    assert_eq!(harness.file_content(), Some(text.as_bytes().to_vec()));
}
