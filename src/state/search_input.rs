//! Search bar text editing and debounce (pure state transitions).
//!
//! Editing functions take the input by value and return the updated input,
//! so they are testable without a terminal. The cursor is a character index,
//! not a byte offset.
//!
//! Every edit stamps the input as dirty. [`SearchInput::take_due`] hands the
//! text to the session once the debounce window has elapsed without further
//! edits; clearing bypasses the debounce entirely.

use std::time::{Duration, Instant};

/// Default quiet period between the last keystroke and the search.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Search bar contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
    edited_at: Option<Instant>,
}

impl SearchInput {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `text`, cursor at the end, nothing pending.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            edited_at: None,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether an edit is waiting for its debounce to elapse.
    pub fn is_pending(&self) -> bool {
        self.edited_at.is_some()
    }

    /// Returns the text once `debounce` has passed since the last edit.
    ///
    /// The pending edit is consumed, so each burst of typing yields at most
    /// one search.
    pub fn take_due(&mut self, now: Instant, debounce: Duration) -> Option<String> {
        let edited_at = self.edited_at?;
        if now.saturating_duration_since(edited_at) >= debounce {
            self.edited_at = None;
            Some(self.text.clone())
        } else {
            None
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Insert `ch` at the cursor and advance it.
pub fn handle_char_input(mut input: SearchInput, ch: char, now: Instant) -> SearchInput {
    let at = input.byte_offset(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input.edited_at = Some(now);
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: SearchInput, now: Instant) -> SearchInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_offset(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input.edited_at = Some(now);
    input
}

/// Saturates at 0.
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Saturates at the text length.
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    let max_cursor = input.text.chars().count();
    input.cursor = (input.cursor + 1).min(max_cursor);
    input
}

/// Empty the input and drop any pending edit.
///
/// The caller searches for the empty string immediately.
pub fn clear_input(_input: SearchInput) -> SearchInput {
    SearchInput::new()
}

#[cfg(test)]
#[path = "search_input_tests.rs"]
mod tests;
