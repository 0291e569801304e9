//! Tests for ordinate formatting

extern crate std;

use approx::assert_relative_eq;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::codec::errors::GeoJsonError;
use crate::codec::number::{CoordinateFormatter, FormattedNumber};
use crate::codec::sequence::parse_ordinate;

#[test]
fn test_value_within_budget_is_unchanged() {
    let formatter = CoordinateFormatter::new(false);
    let formatted = formatter.round(102.123456789).unwrap();
    std::assert_eq!(formatted, FormattedNumber::Float(102.123456789));
}

#[test]
fn test_excess_fraction_digits_are_rounded() {
    let formatter = CoordinateFormatter::new(false);
    let formatted = formatter.round(0.12345678951).unwrap();
    assert_relative_eq!(formatted.as_f64(), 0.123456790);
}

#[test]
fn test_rounding_is_half_away_from_zero() {
    let formatter = CoordinateFormatter::with_digits(true, 17, 2);
    std::assert_eq!(formatter.round(0.125).unwrap(), FormattedNumber::Decimal(Decimal::from_str("0.13").unwrap()));
    std::assert_eq!(formatter.round(-0.125).unwrap(), FormattedNumber::Decimal(Decimal::from_str("-0.13").unwrap()));
}

#[test]
fn test_non_finite_values_are_omitted() {
    let formatter = CoordinateFormatter::default();
    std::assert!(formatter.round(f64::NAN).is_none());
    std::assert!(formatter.round(f64::INFINITY).is_none());
    std::assert!(formatter.round_to_json(f64::NEG_INFINITY).is_none());
}

#[test]
fn test_decimal_mode_keeps_exact_digits() {
    let formatter = CoordinateFormatter::new(true);
    std::assert!(formatter.is_arbitrary_precision());

    let json = formatter.round_to_json(0.1).unwrap();
    std::assert_eq!(json.to_string(), "0.1");

    let json = formatter.round_to_json(2.0).unwrap();
    std::assert_eq!(json.to_string(), "2");
}

#[test]
fn test_large_integer_part_is_passed_through() {
    let formatter = CoordinateFormatter::new(false);
    let formatted = formatter.round(20037508.342789244).unwrap();
    assert_relative_eq!(formatted.as_f64(), 20037508.342789244, max_relative = 1e-12);
}

#[test]
fn test_ordinate_text_must_fit_an_f64() {
    std::assert_eq!(parse_ordinate("-12.5e2").unwrap(), -1250.0);
    std::assert_eq!(parse_ordinate(" 7 ").unwrap(), 7.0);
    for text in ["1e400", "-1e400", "inf", "NaN", "", "1,5"] {
        std::assert!(
            matches!(parse_ordinate(text), Err(GeoJsonError::MalformedNumber(_))),
            "{:?} should be rejected",
            text
        );
    }
}
