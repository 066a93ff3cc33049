//! Terminal front end: app state, keyboard handling, keypad and
//! rendering

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_rect, render};
