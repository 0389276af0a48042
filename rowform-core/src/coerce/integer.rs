//! Integer coercion

use super::text::render;
use crate::error::{CoercionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static INTEGER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-|\+)?([0-9]+|Infinity)$").expect("integer regex should compile"));

/// Ensure the value is an integer or a string spelling one.
///
/// Whole numbers are returned unchanged. Strings made of an optional sign and
/// decimal digits are parsed; the literal `Infinity` saturates to `i64::MAX`
/// (or `i64::MIN` when negated). Booleans, fractional numbers and everything
/// else are rejected rather than truncated.
pub fn ensure_integer(value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(number) => whole_number(number),
        Value::String(text) => parse_integer_text(text),
        _ => None,
    };

    parsed.ok_or_else(|| CoercionError::InvalidInteger(render(value)))
}

/// [`ensure_integer`] that additionally rejects negative results.
///
/// Zero is accepted: the lower bound is inclusive.
pub fn ensure_positive_integer(value: &Value) -> Result<i64> {
    let integer = ensure_integer(value)?;
    if integer < 0 {
        return Err(CoercionError::NegativeValue(integer));
    }
    Ok(integer)
}

fn whole_number(number: &Number) -> Option<i64> {
    if let Some(integer) = number.as_i64() {
        return Some(integer);
    }
    if number.is_u64() {
        return None;
    }

    let float = number.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    if float.is_finite() && float.fract() == 0.0 && in_range {
        Some(float as i64)
    } else {
        None
    }
}

fn parse_integer_text(text: &str) -> Option<i64> {
    let captures = INTEGER_TEXT.captures(text)?;
    let negative = captures.get(1).is_some_and(|sign| sign.as_str() == "-");

    if captures.get(2)?.as_str() == "Infinity" {
        return Some(if negative { i64::MIN } else { i64::MAX });
    }

    text.parse::<i64>().ok()
}
