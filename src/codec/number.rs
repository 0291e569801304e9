//! Ordinate formatting
//!
//! Ordinates are emitted with at most `max_integer_digits` digits before and
//! `max_fraction_digits` digits after the decimal point. A value that already
//! fits the budget is passed through untouched; only values that would
//! overflow it are rounded, half away from zero.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};

use crate::config::CodecConfig;

/// Default digit budget before the decimal point
pub const MAX_INTEGER_DIGITS: u32 = 17;
/// Default digit budget after the decimal point
pub const MAX_FRACTION_DIGITS: u32 = 9;

/// A formatted ordinate, ready to be placed in a JSON document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormattedNumber {
    Float(f64),
    Decimal(Decimal),
}

impl FormattedNumber {
    /// Numeric value as a 64-bit float
    pub fn as_f64(&self) -> f64 {
        match self {
            FormattedNumber::Float(v) => *v,
            FormattedNumber::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// JSON number; decimals keep their exact digits
    pub fn to_json(&self) -> Value {
        match self {
            FormattedNumber::Float(v) => Value::from(*v),
            FormattedNumber::Decimal(d) => match Number::from_str(&d.to_string()) {
                Ok(n) => Value::Number(n),
                Err(_) => Value::from(self.as_f64()),
            },
        }
    }
}

/// Formats ordinates within a fixed digit budget
///
/// Immutable once built, so a single instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateFormatter {
    arbitrary_precision: bool,
    max_integer_digits: u32,
    max_fraction_digits: u32,
}

impl CoordinateFormatter {
    /// Create a formatter with the default 17/9 digit budget
    pub fn new(arbitrary_precision: bool) -> Self {
        CoordinateFormatter {
            arbitrary_precision,
            max_integer_digits: MAX_INTEGER_DIGITS,
            max_fraction_digits: MAX_FRACTION_DIGITS,
        }
    }

    /// Create a formatter with a custom digit budget
    pub fn with_digits(arbitrary_precision: bool, max_integer_digits: u32, max_fraction_digits: u32) -> Self {
        CoordinateFormatter {
            arbitrary_precision,
            max_integer_digits,
            max_fraction_digits,
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::with_digits(
            config.arbitrary_precision,
            config.max_integer_digits,
            config.max_fraction_digits,
        )
    }

    pub fn is_arbitrary_precision(&self) -> bool {
        self.arbitrary_precision
    }

    /// Format one ordinate
    ///
    /// Returns `None` for `NaN` (and infinities, which JSON cannot carry);
    /// the caller omits the ordinate.
    pub fn round(&self, value: f64) -> Option<FormattedNumber> {
        if !value.is_finite() {
            return None;
        }

        if !self.exceeds_budget(value) {
            return Some(self.unrounded(value));
        }

        match self.round_half_up(value) {
            Some(rounded) if self.arbitrary_precision => Some(FormattedNumber::Decimal(rounded)),
            Some(rounded) => Some(FormattedNumber::Float(rounded.to_f64().unwrap_or(value))),
            // Magnitude beyond what a Decimal holds; there is no fraction left to round
            None => Some(FormattedNumber::Float(value)),
        }
    }

    /// Format one ordinate straight to a JSON value
    pub fn round_to_json(&self, value: f64) -> Option<Value> {
        self.round(value).map(|n| n.to_json())
    }

    /// Whether the shortest exact rendering of `value` overflows either digit budget
    fn exceeds_budget(&self, value: f64) -> bool {
        // f64 Display never uses exponent notation and round-trips exactly
        let probe = format!("{}", value.abs());
        let (integer, fraction) = match probe.split_once('.') {
            Some((i, f)) => (i, f),
            None => (probe.as_str(), ""),
        };
        integer.len() > self.max_integer_digits as usize
            || fraction.len() > self.max_fraction_digits as usize
    }

    fn unrounded(&self, value: f64) -> FormattedNumber {
        if !self.arbitrary_precision {
            return FormattedNumber::Float(value);
        }
        match Decimal::from_str(&format!("{}", value)) {
            Ok(d) => FormattedNumber::Decimal(d),
            Err(_) => FormattedNumber::Float(value),
        }
    }

    fn round_half_up(&self, value: f64) -> Option<Decimal> {
        // Round the exact binary value, not its shortest decimal rendering
        let exact = Decimal::from_f64_retain(value)?;
        Some(
            exact
                .round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }
}

impl Default for CoordinateFormatter {
    fn default() -> Self {
        CoordinateFormatter::new(false)
    }
}
