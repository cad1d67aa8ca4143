//! Per-value type detection.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Type of a single trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
    Empty,
    Boolean,
    Integer,
    Decimal,
    Date,
    Text,
}

const BOOLEAN_LITERALS: [&str; 8] = ["true", "false", "yes", "no", "1", "0", "y", "n"];

/// Date-time layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date layouts, in order: ISO, US slash, EU slash, dashed US and EU, long forms.
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Classifies one value. Checks run in a fixed priority order, so `1` is a
/// boolean before it is an integer.
pub fn detect_value_type(value: &str) -> ValueType {
    let value = value.trim();
    if value.is_empty() {
        ValueType::Empty
    } else if is_boolean(value) {
        ValueType::Boolean
    } else if is_integer(value) {
        ValueType::Integer
    } else if parse_decimal(value).is_some() {
        ValueType::Decimal
    } else if is_date(value) {
        ValueType::Date
    } else {
        ValueType::Text
    }
}

pub fn is_boolean(value: &str) -> bool {
    BOOLEAN_LITERALS
        .iter()
        .any(|literal| value.eq_ignore_ascii_case(literal))
}

/// Optional leading minus followed by ASCII digits only.
pub fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a decimal number after removing `,` thousands separators.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Words such as `inf` or `NaN`, and values that overflow
/// `f64`, are rejected.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let stripped: String = value.chars().filter(|&ch| ch != ',').collect();
    let body = stripped
        .strip_prefix(['+', '-'])
        .unwrap_or(&stripped);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !digits_only(whole) || !digits_only(fraction) {
        return None;
    }
    if let Some(exponent) = exponent {
        let exponent_digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exponent_digits.is_empty() || !digits_only(exponent_digits) {
            return None;
        }
    }
    stripped.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses any value that counts as a number for statistics.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if is_integer(value) {
        value.parse::<f64>().ok()
    } else {
        parse_decimal(value)
    }
}

fn has_year(value: &str) -> bool {
    value
        .as_bytes()
        .windows(4)
        .any(|window| window.iter().all(u8::is_ascii_digit))
}

/// Matches the supported date and date-time layouts. A four-digit year is
/// required so short dashed numbers are not read as dates.
pub fn is_date(value: &str) -> bool {
    if !has_year(value) {
        return false;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
        || DATETIME_FORMATS.iter().any(|format| {
            DateTime::parse_from_str(value, format).is_ok()
                || NaiveDateTime::parse_from_str(value, format).is_ok()
        })
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}
