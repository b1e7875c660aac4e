//! Tests for search bar editing and debounce.

use super::*;

fn type_str(mut input: SearchInput, s: &str, now: Instant) -> SearchInput {
    for ch in s.chars() {
        input = handle_char_input(input, ch, now);
    }
    input
}

// ===== Editing =====

#[test]
fn typing_appends_and_advances_cursor() {
    let now = Instant::now();
    let input = type_str(SearchInput::new(), "cat", now);
    assert_eq!(input.text(), "cat");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn typing_inserts_at_cursor() {
    let now = Instant::now();
    let input = type_str(SearchInput::new(), "ct", now);
    let input = handle_cursor_left(input);
    let input = handle_char_input(input, 'a', now);
    assert_eq!(input.text(), "cat");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn multibyte_characters_use_char_positions() {
    let now = Instant::now();
    let input = type_str(SearchInput::new(), "cafe", now);
    let input = handle_backspace(input, now);
    let input = handle_char_input(input, 'é', now);
    let input = handle_cursor_left(input);
    let input = handle_char_input(input, 'x', now);
    assert_eq!(input.text(), "cafxé");
    assert_eq!(input.cursor(), 4);
}

#[test]
fn backspace_at_start_is_noop() {
    let input = SearchInput::with_text("dog");
    let input = handle_cursor_left(handle_cursor_left(handle_cursor_left(input)));
    let input = handle_backspace(input, Instant::now());
    assert_eq!(input.text(), "dog");
    assert!(!input.is_pending());
}

#[test]
fn cursor_saturates_at_both_ends() {
    let input = SearchInput::with_text("ab");
    let input = handle_cursor_right(input);
    assert_eq!(input.cursor(), 2);
    let input = handle_cursor_left(handle_cursor_left(handle_cursor_left(input)));
    assert_eq!(input.cursor(), 0);
}

#[test]
fn with_text_is_not_pending() {
    let input = SearchInput::with_text("preset");
    assert_eq!(input.cursor(), 6);
    assert!(!input.is_pending());
}

// ===== Debounce =====

#[test]
fn edit_is_not_due_before_debounce() {
    let start = Instant::now();
    let mut input = type_str(SearchInput::new(), "dogs", start);

    let due = input.take_due(start + Duration::from_millis(399), DEFAULT_DEBOUNCE);

    assert_eq!(due, None);
    assert!(input.is_pending());
}

#[test]
fn edit_is_due_after_debounce_once() {
    let start = Instant::now();
    let mut input = type_str(SearchInput::new(), "dogs", start);
    let later = start + DEFAULT_DEBOUNCE;

    assert_eq!(input.take_due(later, DEFAULT_DEBOUNCE), Some("dogs".into()));
    assert_eq!(input.take_due(later, DEFAULT_DEBOUNCE), None);
}

#[test]
fn later_keystroke_restarts_window() {
    let start = Instant::now();
    let input = type_str(SearchInput::new(), "do", start);
    let mid = start + Duration::from_millis(300);
    let mut input = handle_char_input(input, 'g', mid);

    assert_eq!(
        input.take_due(start + Duration::from_millis(500), DEFAULT_DEBOUNCE),
        None
    );
    assert_eq!(
        input.take_due(mid + DEFAULT_DEBOUNCE, DEFAULT_DEBOUNCE),
        Some("dog".into())
    );
}

#[test]
fn clear_drops_pending_edit() {
    let start = Instant::now();
    let input = type_str(SearchInput::new(), "dogs", start);
    let mut input = clear_input(input);

    assert_eq!(input.text(), "");
    assert_eq!(input.cursor(), 0);
    assert_eq!(input.take_due(start + DEFAULT_DEBOUNCE, DEFAULT_DEBOUNCE), None);
}
