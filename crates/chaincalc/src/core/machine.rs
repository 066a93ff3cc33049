//! Evaluation state machine: chained binary operations applied eagerly
//! left to right, with the display text kept in sync
//!
//! There is no operator precedence: `3 + 4 * 2 =` evaluates as
//! `(3 + 4) * 2 = 14`. Each operator press folds the pending operator
//! into the running total; equals folds once more and renders the
//! total.

use tracing::{debug, trace};

use crate::core::display::{format_value, Screen};
use crate::core::operand::OperandAccumulator;
use crate::core::Operation;
use crate::input::Action;

/// The complete calculator state, mutated only through its transition
/// methods.
///
/// Owning the state in a plain struct (rather than anything global)
/// keeps instances independent and unit tests free of cross-test
/// resets.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Running total carried across chained operations
    total: f64,
    /// True once an operator has been applied since the last clear or
    /// equals
    in_operation: bool,
    /// Operator awaiting its right-hand operand
    current_op: Option<Operation>,
    /// Value of the operand currently being entered
    working_value: f64,
    /// Digit/decimal accumulator for the current operand
    operand: OperandAccumulator,
    /// Mirror of the rendered display text
    display: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in the cleared configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            total: 0.0,
            in_operation: false,
            current_op: None,
            working_value: 0.0,
            operand: OperandAccumulator::new(),
            display: "0".to_string(),
        }
    }

    /// Dispatches one normalized input action
    pub fn press(&mut self, action: Action) {
        match action {
            Action::Digit(d) => self.press_digit(d),
            Action::Decimal => self.press_decimal(),
            Action::Operator(op) => self.press_operator(op),
            Action::Equals => self.press_equals(),
            Action::Clear => self.press_clear(),
        }
    }

    /// Enters one digit of the current operand
    pub fn press_digit(&mut self, digit: u8) {
        self.working_value = self.operand.push_digit(digit);
        self.echo_char(char::from(b'0' + (digit % 10)));
        trace!(digit, working_value = self.working_value, "digit entered");
    }

    /// Starts decimal entry for the current operand.
    ///
    /// A second decimal press mid-operand is a no-op: no state change
    /// and no display echo, regardless of the input device.
    pub fn press_decimal(&mut self) {
        if let Some(value) = self.operand.push_decimal(self.working_value) {
            self.working_value = value;
            self.echo_char('.');
            trace!(working_value = self.working_value, "decimal entry started");
        }
    }

    /// Applies the pending operator (if any) and stores the new one.
    ///
    /// The first operator press copies the working value into the
    /// total. When the press that closed the operand was the decimal
    /// point itself, the working value is not zeroed, only the
    /// accumulators are.
    pub fn press_operator(&mut self, op: Operation) {
        self.total = match self.current_op {
            Some(pending) if self.in_operation => pending.apply(self.total, self.working_value),
            _ => self.working_value,
        };
        self.in_operation = true;
        self.display.push_str(&format!(" {} ", op.symbol()));
        if !self.operand.trailing_decimal() {
            self.working_value = 0.0;
        }
        self.current_op = Some(op);
        self.operand.reset();
        debug!(op = op.id(), total = self.total, "operator applied");
    }

    /// Applies the pending operator and renders the total.
    ///
    /// With no operator pending, equals commits the working value as
    /// the total (the same rule the first operator press uses), keeping
    /// the transition total.
    pub fn press_equals(&mut self) {
        self.total = match self.current_op {
            Some(pending) => pending.apply(self.total, self.working_value),
            None => self.working_value,
        };
        self.display = format_value(self.total);
        self.working_value = self.total;
        self.current_op = None;
        self.in_operation = false;
        self.operand.reset();
        debug!(total = self.total, "evaluated");
    }

    /// Returns every field to its initial value
    pub fn press_clear(&mut self) {
        self.total = 0.0;
        self.in_operation = false;
        self.current_op = None;
        self.working_value = 0.0;
        self.operand.clear();
        self.display = "0".to_string();
        debug!("cleared");
    }

    /// Appends a typed character to the display, replacing the `0`
    /// placeholder
    fn echo_char(&mut self, c: char) {
        if self.display == "0" {
            self.display.clear();
        }
        self.display.push(c);
    }

    /// Writes the current display text to a render sink
    pub fn render_to(&self, screen: &mut dyn Screen) {
        screen.set_text(&self.display);
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Running total
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Value of the operand currently being entered
    #[must_use]
    pub fn working_value(&self) -> f64 {
        self.working_value
    }

    /// True once an operator has been applied since the last clear or
    /// equals
    #[must_use]
    pub fn in_operation(&self) -> bool {
        self.in_operation
    }

    /// Operator awaiting its right-hand operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.current_op
    }

    /// True while the current operand is in decimal entry
    #[must_use]
    pub fn entering_decimal(&self) -> bool {
        self.operand.entering_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::TextScreen;

    fn press_all(calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            if let Some(action) = Action::from_char(c) {
                calc.press(action);
            }
        }
    }

    // ===== Initial state =====

    #[test]
    fn test_new_is_cleared() {
        let calc = Calculator::new();
        assert_eq!(calc.total(), 0.0);
        assert_eq!(calc.working_value(), 0.0);
        assert!(!calc.in_operation());
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.entering_decimal());
        assert_eq!(calc.display(), "0");
    }

    // ===== Digit entry and display echo =====

    #[test]
    fn test_digit_replaces_zero_placeholder() {
        let mut calc = Calculator::new();
        calc.press_digit(3);
        assert_eq!(calc.display(), "3");
        calc.press_digit(7);
        assert_eq!(calc.display(), "37");
        assert_eq!(calc.working_value(), 37.0);
    }

    #[test]
    fn test_zero_stays_placeholder() {
        let mut calc = Calculator::new();
        calc.press_digit(0);
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.working_value(), 0.0);
    }

    #[test]
    fn test_decimal_entry_working_value() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1.5");
        assert_eq!(calc.working_value(), 1.5);
        assert_eq!(calc.display(), "1.5");
        assert!(calc.entering_decimal());
    }

    #[test]
    fn test_second_decimal_has_no_effect_on_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1.5.");
        assert_eq!(calc.display(), "1.5");
        assert_eq!(calc.working_value(), 1.5);
    }

    // ===== Operator echo =====

    #[test]
    fn test_operator_appends_symbol_echo() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "3+");
        assert_eq!(calc.display(), "3 + ");
        press_all(&mut calc, "4");
        assert_eq!(calc.display(), "3 + 4");
    }

    #[test]
    fn test_operator_on_cleared_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "+");
        assert_eq!(calc.display(), "0 + ");
        assert_eq!(calc.total(), 0.0);
        assert!(calc.in_operation());
    }

    // ===== Eager left-to-right evaluation =====

    #[test]
    fn test_no_precedence() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "3+4*2=");
        assert_eq!(calc.total(), 14.0);
        assert_eq!(calc.display(), "14");
    }

    #[test]
    fn test_single_operator_matches_direct_application() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "6/3=");
        assert_eq!(calc.total(), 2.0);
        assert_eq!(calc.display(), "2");
    }

    #[test]
    fn test_operator_press_applies_pending_operator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "3+4*");
        assert_eq!(calc.total(), 7.0);
        assert_eq!(calc.pending_operator(), Some(Operation::Multiply));
        assert_eq!(calc.display(), "3 + 4 * ");
    }

    #[test]
    fn test_exponentiation_chain() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2^10=");
        assert_eq!(calc.total(), 1024.0);
    }

    #[test]
    fn test_chain_continues_after_equals() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2+3=");
        assert_eq!(calc.total(), 5.0);
        press_all(&mut calc, "*2=");
        assert_eq!(calc.total(), 10.0);
    }

    // ===== Division by zero and float artifacts =====

    #[test]
    fn test_divide_by_zero_displays_infinity() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1/0=");
        assert_eq!(calc.total(), f64::INFINITY);
        assert_eq!(calc.display(), "Infinity");
    }

    #[test]
    fn test_float_artifact_preserved() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "0.1+0.2=");
        assert_eq!(calc.display(), "0.30000000000000004");
    }

    // ===== Equals edge cases =====

    #[test]
    fn test_equals_resets_operation_state() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2+3=");
        assert!(!calc.in_operation());
        assert_eq!(calc.pending_operator(), None);
        assert!(!calc.entering_decimal());
        assert_eq!(calc.working_value(), 5.0);
    }

    #[test]
    fn test_equals_without_operator_commits_working_value() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "5=");
        assert_eq!(calc.total(), 5.0);
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_repeated_equals_keeps_total() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2+3==");
        assert_eq!(calc.total(), 5.0);
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_digits_after_equals_start_fresh_operand() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2+2=");
        calc.press_digit(5);
        // Display keeps appending (accumulation mode), but the operand
        // restarts from the typed digit. The screen and the working
        // value disagree until the next operator or equals resolves
        // the echo from state.
        assert_eq!(calc.display(), "45");
        assert_eq!(calc.working_value(), 5.0);
        calc.press_equals();
        assert_eq!(calc.display(), "5");
    }

    // ===== Skip-reset quirk =====

    #[test]
    fn test_trailing_decimal_skips_working_value_reset() {
        // "3 . + =" - the operand closed on the decimal point, so the
        // working value survives the operator press and equals folds it
        // again: 3 + 3 = 6.
        let mut calc = Calculator::new();
        press_all(&mut calc, "3.+=");
        assert_eq!(calc.total(), 6.0);
    }

    #[test]
    fn test_skip_reset_persists_across_operators() {
        // The flag is only cleared by digit presses, so consecutive
        // operators keep folding the stale working value: 3 . + * =
        // evaluates as ((3 + 3) * 3) = 18.
        let mut calc = Calculator::new();
        press_all(&mut calc, "3.+*=");
        assert_eq!(calc.total(), 18.0);
    }

    #[test]
    fn test_completed_decimal_operand_resets_normally() {
        // "1.5 + =" - the operand closed on a digit, so the working
        // value is zeroed: 1.5 + 0 = 1.5.
        let mut calc = Calculator::new();
        press_all(&mut calc, "1.5+=");
        assert_eq!(calc.total(), 1.5);
    }

    // ===== Decimal anchoring through the machine =====

    #[test]
    fn test_decimal_after_fractional_result_anchors_to_zero() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "7/2=");
        assert_eq!(calc.total(), 3.5);
        press_all(&mut calc, ".5");
        assert_eq!(calc.working_value(), 0.5);
    }

    #[test]
    fn test_decimal_after_whole_result_carries_whole_part() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2+1=");
        press_all(&mut calc, ".5");
        assert_eq!(calc.working_value(), 3.5);
    }

    // ===== Clear =====

    #[test]
    fn test_clear_restores_initial_state() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1.5+2*");
        calc.press_clear();
        assert_eq!(calc, Calculator::new());
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "9*9");
        calc.press_clear();
        let once = calc.clone();
        calc.press_clear();
        assert_eq!(calc, once);
    }

    #[test]
    fn test_clear_resets_trailing_decimal() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "3.");
        calc.press_clear();
        press_all(&mut calc, "3+=");
        // No stale skip-reset after clear: 3 + 0 = 3.
        assert_eq!(calc.total(), 3.0);
    }

    // ===== Render sink =====

    #[test]
    fn test_render_to_screen() {
        let mut calc = Calculator::new();
        let mut screen = TextScreen::new();
        press_all(&mut calc, "3+");
        calc.render_to(&mut screen);
        press_all(&mut calc, "4=");
        calc.render_to(&mut screen);
        assert_eq!(screen.writes(), ["3 + ", "7"]);
        assert_eq!(screen.text(), "7");
    }

    // ===== Dispatch =====

    #[test]
    fn test_press_dispatches_all_actions() {
        let mut calc = Calculator::new();
        calc.press(Action::Digit(6));
        calc.press(Action::Operator(Operation::Divide));
        calc.press(Action::Digit(4));
        calc.press(Action::Equals);
        assert_eq!(calc.total(), 1.5);
        calc.press(Action::Clear);
        assert_eq!(calc.display(), "0");
    }
}
