//! Keyboard handling for the TUI
//!
//! Terminal key events are normalized into calculator actions; anything
//! outside the vocabulary is ignored. The decimal guard lives in the
//! operand accumulator, so no gating happens here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::input::Action;

/// Actions a TUI key event can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A normalized calculator action
    Input(Action),
    /// Discard the tape
    ClearTape,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps terminal key events to [`KeyAction`]s
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearTape,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Action::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            KeyCode::Enter => KeyAction::Input(Action::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Input(Action::Clear),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
