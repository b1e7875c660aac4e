//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Keys typed while the search bar has
/// focus never reach these bindings; they edit the search text instead.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

const NONE: KeyModifiers = KeyModifiers::NONE;
const SHIFT: KeyModifiers = KeyModifiers::SHIFT;
const CTRL: KeyModifiers = KeyModifiers::CONTROL;

const DEFAULT_BINDINGS: &[(KeyCode, KeyModifiers, KeyAction)] = &[
    // Vim-style scrolling
    (KeyCode::Char('j'), NONE, KeyAction::ScrollDown),
    (KeyCode::Char('k'), NONE, KeyAction::ScrollUp),
    (KeyCode::Char('g'), NONE, KeyAction::ScrollToTop),
    (KeyCode::Char('G'), SHIFT, KeyAction::ScrollToBottom),
    // Arrow key scrolling
    (KeyCode::Down, NONE, KeyAction::ScrollDown),
    (KeyCode::Up, NONE, KeyAction::ScrollUp),
    (KeyCode::Home, NONE, KeyAction::ScrollToTop),
    (KeyCode::End, NONE, KeyAction::ScrollToBottom),
    // Page navigation
    (KeyCode::Char('d'), CTRL, KeyAction::PageDown),
    (KeyCode::Char('u'), CTRL, KeyAction::PageUp),
    (KeyCode::PageDown, NONE, KeyAction::PageDown),
    (KeyCode::PageUp, NONE, KeyAction::PageUp),
    // Selection
    (KeyCode::Char('h'), NONE, KeyAction::SelectPrev),
    (KeyCode::Char('l'), NONE, KeyAction::SelectNext),
    (KeyCode::Left, NONE, KeyAction::SelectPrev),
    (KeyCode::Right, NONE, KeyAction::SelectNext),
    (KeyCode::Enter, NONE, KeyAction::Activate),
    (KeyCode::Char(' '), NONE, KeyAction::Activate),
    // Focus
    (KeyCode::Tab, NONE, KeyAction::CycleFocus),
    (KeyCode::Char('/'), NONE, KeyAction::StartSearch),
    (KeyCode::Char('f'), CTRL, KeyAction::StartSearch),
    (KeyCode::Esc, NONE, KeyAction::Cancel),
    // Filters
    (KeyCode::Char('f'), NONE, KeyAction::OpenFilters),
    (KeyCode::Char('x'), NONE, KeyAction::ClearFilter),
    (KeyCode::Delete, NONE, KeyAction::ClearFilter),
    (KeyCode::Char('a'), NONE, KeyAction::ApplyFilters),
    (KeyCode::Char('r'), NONE, KeyAction::ResetFilters),
    // Detail view
    (KeyCode::Char('d'), NONE, KeyAction::Download),
    (KeyCode::Char('s'), NONE, KeyAction::Share),
    // Application controls
    (KeyCode::Char('q'), NONE, KeyAction::Quit),
    (KeyCode::Char('c'), CTRL, KeyAction::Quit),
    // '?' arrives with SHIFT on most terminals
    (KeyCode::Char('?'), NONE, KeyAction::Help),
    (KeyCode::Char('?'), SHIFT, KeyAction::Help),
];

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = DEFAULT_BINDINGS
            .iter()
            .map(|&(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();
        Self { bindings }
    }
}
