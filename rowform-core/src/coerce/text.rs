//! String coercion and the textual form of values

use super::{EnsureOptions, is_empty_input};
use crate::error::{CoercionError, RequiredKind, Result};
use serde_json::{Number, Value};

/// Placeholder produced when a key-value object is stringified.
///
/// Objects are never serialized structurally; every object renders as this
/// single opaque token.
pub const GENERIC_OBJECT_TOKEN: &str = "[object Object]";

/// Ensure the value is a string, converting it when possible.
///
/// `null`, `""` and `[]` become `""` (or fail when `allow_empty` is false).
/// Arrays are flattened to any depth and joined with `,`; everything else uses
/// its literal textual form.
pub fn ensure_string(value: &Value, options: EnsureOptions) -> Result<String> {
    if is_empty_input(value) {
        if !options.allow_empty {
            return Err(CoercionError::RequiredValue(RequiredKind::String));
        }
        return Ok(String::new());
    }

    Ok(render(value))
}

/// [`ensure_string`] with `allow_empty` forced to false.
///
/// The options are accepted for call-site symmetry; `allow_empty` is ignored.
pub fn ensure_non_empty_string(value: &Value, _options: EnsureOptions) -> Result<String> {
    ensure_string(value, EnsureOptions::required())
}

/// Textual form of any value, mirroring template-string interpolation.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => render_number(number),
        Value::String(text) => text.clone(),
        Value::Array(_) => {
            let mut flat = Vec::new();
            flatten_into(value, &mut flat);
            flat.into_iter()
                .map(render_element)
                .collect::<Vec<_>>()
                .join(",")
        }
        Value::Object(_) => GENERIC_OBJECT_TOKEN.to_string(),
    }
}

/// Number text as ECMAScript `Number::toString` produces it.
///
/// Floats use the shortest round-trip digits, switching to exponent form below
/// `1e-6` and from `1e21` up. `5.0` renders as `5` and `-0.0` as `0`.
pub(crate) fn render_number(number: &Number) -> String {
    if let Some(integer) = number.as_i64() {
        return integer.to_string();
    }
    if let Some(integer) = number.as_u64() {
        return integer.to_string();
    }

    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) => ryu_js::Buffer::new().format(float).to_string(),
        None => number.to_string(),
    }
}

fn flatten_into<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(other),
    }
}

// Joined elements render null as an empty slot.
fn render_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => render(other),
    }
}
