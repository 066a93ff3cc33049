//! Calculator TUI example
//!
//! Run with: cargo run --example calculator_tui

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use chaincalc::tui::{keypad_rect, render, CalculatorApp, InputHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle(input_handler.handle_key(key)),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                let size = terminal.size()?;
                let keypad = keypad_rect(Rect::new(0, 0, size.width, size.height));
                if let Some(index) = app.keypad().hit_test(keypad, mouse.column, mouse.row) {
                    app.press_button(index);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
