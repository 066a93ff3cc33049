//! Display formatting and the render sink
//!
//! Two display modes exist: accumulation mode is raw concatenation of
//! typed characters (handled by the state machine), result mode renders
//! the numeric total through [`format_value`].

/// Formats a result value for the display.
///
/// Uses the platform default float-to-string conversion with no fixed
/// precision, so floating-point artifacts are preserved exactly
/// (`0.1 + 0.2` renders as `0.30000000000000004`). Non-finite values
/// spell out as `Infinity`, `-Infinity` and `NaN` rather than failing.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{value}")
    }
}

/// Render sink for the display surface.
///
/// The core only ever writes to the sink; it never reads back.
pub trait Screen {
    /// Replaces the displayed text
    fn set_text(&mut self, text: &str);
}

/// In-memory screen recording every write, for tests and demos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextScreen {
    /// Text currently shown
    text: String,
    /// Every text ever set, in order
    writes: Vec<String>,
}

impl TextScreen {
    /// Creates a screen showing the cleared display
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            writes: Vec::new(),
        }
    }

    /// Text currently shown
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Full write log, oldest first
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Screen for TextScreen {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.writes.push(text.to_string());
    }
}
