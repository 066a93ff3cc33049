//! TUI rendering: display, tape panel, keypad and key hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Key hints shown at the bottom of the screen
const HELP_LINE: &str = "0-9 . + - * / ^  =/Enter equals  Backspace clear  Ctrl+L clear tape  Esc quit";

/// Splits the frame into display, tape, keypad and help areas
fn split(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(8),    // Tape + keypad
            Constraint::Length(1), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Tape
            Constraint::Length(17), // Keypad (3 cols x 5 wide + border)
        ])
        .split(outer[1]);

    (outer[0], body[0], body[1], outer[2])
}

/// Screen region occupied by the keypad, for pointer hit-testing
#[must_use]
pub fn keypad_rect(area: Rect) -> Rect {
    split(area).2
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let (display_area, tape_area, keypad_area, help_area) = split(frame.area());

    // Display: right-aligned, like a desk calculator
    let display = Paragraph::new(Span::styled(
        app.calc().display().to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .title(" Display ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(display, display_area);

    // Tape: newest first
    let entries: Vec<ListItem> = app
        .tape()
        .iter_rev()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.line(),
                Style::default().fg(Color::Gray),
            )))
        })
        .collect();
    let tape = List::new(entries).block(
        Block::default()
            .title(" Tape ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(tape, tape_area);

    frame.render_widget(KeypadWidget::new(app.keypad()), keypad_area);

    let help = Paragraph::new(Span::styled(
        HELP_LINE,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, help_area);
}
