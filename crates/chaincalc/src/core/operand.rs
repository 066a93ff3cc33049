//! Operand accumulator: builds the working value from digit and decimal
//! presses
//!
//! Digits accumulate numerically (no string concatenation and reparse).
//! The fractional accumulator is a plain number, so leading zeros typed
//! after the decimal point do not survive (`1.05` accumulates as
//! `1.5`). The working value is always `whole + fraction / 10^digits`
//! where `digits` is the decimal length of the fraction accumulator.

/// Decimal anchoring policy.
///
/// When a decimal point is accepted, the whole-part accumulator is
/// re-anchored: a working value of zero, or one that already carries a
/// fractional remainder, anchors to 0; a whole working value carries
/// over as the new whole part. The rule is value-dependent and lives
/// here so it can be tested in isolation.
#[must_use]
pub fn anchored_whole(working_value: f64) -> f64 {
    if working_value == 0.0 || working_value.fract() != 0.0 {
        0.0
    } else {
        working_value
    }
}

/// Accumulates the operand currently being entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandAccumulator {
    /// Whole-part accumulator
    whole: f64,
    /// Fractional-part accumulator (integer-valued; scale is derived)
    fraction: f64,
    /// True from an accepted decimal press until the operand closes
    entering_decimal: bool,
    /// True when the most recent digit/decimal press was the decimal
    /// point. Only digit presses, decimal presses and clear mutate this;
    /// closing an operand does not.
    trailing_decimal: bool,
}

impl OperandAccumulator {
    /// Creates an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a digit press and returns the recomputed working value.
    ///
    /// `digit` must be 0..=9; the input normalizer guarantees this.
    pub fn push_digit(&mut self, digit: u8) -> f64 {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        self.trailing_decimal = false;
        if self.entering_decimal {
            self.fraction = self.fraction * 10.0 + f64::from(digit);
        } else {
            self.whole = self.whole * 10.0 + f64::from(digit);
        }
        self.value()
    }

    /// Accepts a decimal-point press.
    ///
    /// Returns the recomputed working value, or `None` when the operand
    /// is already in decimal entry. The guard lives here so keyboard and
    /// pointer input behave identically; a rejected press changes
    /// nothing, including the display.
    pub fn push_decimal(&mut self, working_value: f64) -> Option<f64> {
        if self.entering_decimal {
            return None;
        }
        self.entering_decimal = true;
        self.trailing_decimal = true;
        self.whole = anchored_whole(working_value);
        Some(self.value())
    }

    /// Current value of the operand under construction
    #[must_use]
    pub fn value(&self) -> f64 {
        self.whole + self.fraction / fraction_scale(self.fraction)
    }

    /// Closes the operand: zeroes both accumulators and leaves decimal
    /// entry. The trailing-decimal flag deliberately survives (it
    /// belongs to the keypress stream, not the operand).
    pub fn reset(&mut self) {
        self.whole = 0.0;
        self.fraction = 0.0;
        self.entering_decimal = false;
    }

    /// Full reset, used by the clear action
    pub fn clear(&mut self) {
        self.reset();
        self.trailing_decimal = false;
    }

    /// Whole-part accumulator
    #[must_use]
    pub fn whole_part(&self) -> f64 {
        self.whole
    }

    /// Fractional-part accumulator
    #[must_use]
    pub fn fraction_part(&self) -> f64 {
        self.fraction
    }

    /// True while entering the fractional part of the operand
    #[must_use]
    pub fn entering_decimal(&self) -> bool {
        self.entering_decimal
    }

    /// True when the last digit/decimal press was the decimal point
    #[must_use]
    pub fn trailing_decimal(&self) -> bool {
        self.trailing_decimal
    }
}

/// Power of ten covering the decimal digits of the fraction accumulator.
/// A zero fraction counts as one digit, matching `"0"`.
fn fraction_scale(fraction: f64) -> f64 {
    let digits = if fraction < 10.0 {
        1
    } else {
        (fraction as u64).ilog10() + 1
    };
    10f64.powi(digits as i32)
}
