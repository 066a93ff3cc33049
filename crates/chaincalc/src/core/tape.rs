//! Calculation tape: completed calculations for display and recall
//!
//! The tape is append-only and never feeds back into the state machine,
//! so it is a record, not an undo stack.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::display::format_value;

/// One completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// Screen text at the moment equals was pressed
    pub expression: String,
    /// The resulting total
    pub result: f64,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// Formatted line, e.g. `3 + 4 = 7`
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, format_value(self.result))
    }
}

/// Bounded tape of completed calculations
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape keeping at most `max_entries` lines
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Records a completed calculation, evicting the oldest entry when
    /// the tape is full
    pub fn record(&mut self, expression: &str, result: f64) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(TapeEntry::new(expression, result));
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by index, oldest first
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Discards all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serializes the tape entries to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Restores a tape from JSON produced by [`Tape::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries {
            if tape.entries.len() >= tape.max_entries {
                tape.entries.pop_front();
            }
            tape.entries.push_back(entry);
        }
        Ok(tape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== TapeEntry tests =====

    #[test]
    fn test_entry_line_integer_result() {
        let entry = TapeEntry::new("3 + 4", 7.0);
        assert_eq!(entry.line(), "3 + 4 = 7");
    }

    #[test]
    fn test_entry_line_fractional_result() {
        let entry = TapeEntry::new("7 / 2", 3.5);
        assert_eq!(entry.line(), "7 / 2 = 3.5");
    }

    #[test]
    fn test_entry_line_infinity() {
        let entry = TapeEntry::new("1 / 0", f64::INFINITY);
        assert_eq!(entry.line(), "1 / 0 = Infinity");
    }

    #[test]
    fn test_entry_serde_roundtrip() {
        let entry = TapeEntry::new("6 / 3", 2.0);
        let json = serde_json::to_string(&entry).unwrap();
        let back: TapeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    // ===== Tape tests =====

    #[test]
    fn test_tape_starts_empty() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert_eq!(tape.len(), 0);
        assert!(tape.last().is_none());
    }

    #[test]
    fn test_tape_records_in_order() {
        let mut tape = Tape::new();
        tape.record("1 + 1", 2.0);
        tape.record("2 * 3", 6.0);
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.get(0).unwrap().expression, "1 + 1");
        assert_eq!(tape.last().unwrap().result, 6.0);
    }

    #[test]
    fn test_tape_iter_rev_newest_first() {
        let mut tape = Tape::new();
        tape.record("1 + 1", 2.0);
        tape.record("2 + 2", 4.0);
        let lines: Vec<_> = tape.iter_rev().map(TapeEntry::line).collect();
        assert_eq!(lines, ["2 + 2 = 4", "1 + 1 = 2"]);
    }

    #[test]
    fn test_tape_bounded() {
        let mut tape = Tape::with_capacity(2);
        tape.record("a", 1.0);
        tape.record("b", 2.0);
        tape.record("c", 3.0);
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.get(0).unwrap().expression, "b");
    }

    #[test]
    fn test_tape_clear() {
        let mut tape = Tape::new();
        tape.record("1 + 1", 2.0);
        tape.clear();
        assert!(tape.is_empty());
    }

    #[test]
    fn test_tape_json_roundtrip() {
        let mut tape = Tape::new();
        tape.record("3 + 4 * 2", 14.0);
        tape.record("6 / 3", 2.0);
        let json = tape.to_json().unwrap();
        let back = Tape::from_json(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.get(0).unwrap().line(), "3 + 4 * 2 = 14");
    }

    #[test]
    fn test_tape_from_invalid_json() {
        assert!(Tape::from_json("not json").is_err());
    }
}
