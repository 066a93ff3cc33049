//! TUI application state
//!
//! Wraps the calculator with a tape and keypad highlight state. All
//! input paths (keyboard and pointer) funnel into [`CalculatorApp::apply`].

use crate::core::tape::Tape;
use crate::core::Calculator;
use crate::input::Action;

use super::input::KeyAction;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The evaluation state machine
    calc: Calculator,
    /// Completed calculations
    tape: Tape,
    /// Visual keypad (highlight state)
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new app in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one TUI key action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(a) => self.apply(a),
            KeyAction::ClearTape => self.tape.clear(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Applies one normalized calculator action and updates the keypad
    /// highlight. Equals additionally records the finished calculation
    /// on the tape.
    pub fn apply(&mut self, action: Action) {
        self.keypad.highlight_action(action);
        if action == Action::Equals {
            let expression = self.calc.display().to_string();
            self.calc.press(action);
            self.tape.record(&expression, self.calc.total());
        } else {
            self.calc.press(action);
        }
    }

    /// Activates a keypad button by index (pointer input)
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.keypad.get_button(index) {
            let action = btn.action;
            self.apply(action);
        }
    }

    /// The evaluation state machine
    #[must_use]
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }

    /// Completed calculations, oldest first
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The visual keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
