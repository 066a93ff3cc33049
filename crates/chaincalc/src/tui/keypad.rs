//! Visual keypad for the TUI calculator
//!
//! Buttons carry the same [`Action`]s the keyboard produces, so pointer
//! and keyboard input go through one code path.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;
use crate::input::Action;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character shown on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button emits
    pub action: Action,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(d), 10).unwrap_or('?'),
            pressed: false,
            action: Action::Digit(d),
        }
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        Self {
            label: op.symbol(),
            pressed: false,
            action: Action::Operator(op),
        }
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            action: Action::Decimal,
        }
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            action: Action::Equals,
        }
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            action: Action::Clear,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 6x3 grid of buttons
/// ```text
/// [ 7 ] [ 8 ] [ 9 ]
/// [ 4 ] [ 5 ] [ 6 ]
/// [ 1 ] [ 2 ] [ 3 ]
/// [ 0 ] [ . ] [ = ]
/// [ + ] [ - ] [ * ]
/// [ / ] [ ^ ] [ C ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::digit(0),
            KeypadButton::decimal(),
            KeypadButton::equals(),
            KeypadButton::operator(Operation::Add),
            KeypadButton::operator(Operation::Subtract),
            KeypadButton::operator(Operation::Multiply),
            KeypadButton::operator(Operation::Divide),
            KeypadButton::operator(Operation::Exponentiate),
            KeypadButton::clear(),
        ];

        Self {
            buttons,
            cols: 3,
            rows: 6,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Index of the button emitting the given action
    #[must_use]
    pub fn find_button(&self, action: Action) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Marks a button as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases every button
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for an action, releasing all others
    pub fn highlight_action(&mut self, action: Action) {
        self.release_all();
        if let Some(idx) = self.find_button(action) {
            self.press_button(idx);
        }
    }

    /// Iterates over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the rendered area to a button
    /// index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is 1 char on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 3 || inner.height < 6 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    Action::Digit(_) | Action::Decimal => Style::default().fg(Color::White),
                    Action::Operator(_) => Style::default().fg(Color::Yellow),
                    Action::Equals => Style::default().fg(Color::Green),
                    Action::Clear => Style::default().fg(Color::Red),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
