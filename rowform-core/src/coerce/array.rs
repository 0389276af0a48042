//! Array coercion

use super::{EnsureOptions, is_empty_input};
use crate::error::{CoercionError, RequiredKind, Result};
use serde_json::Value;

/// Ensure the value is an array, converting it when possible.
///
/// Arrays pass through untouched. Strings are read as comma separated values
/// with each piece trimmed, so `"one,two,,"` yields four elements, the last two
/// empty. Any other value becomes a single-element array.
pub fn ensure_array(value: &Value, options: EnsureOptions) -> Result<Vec<Value>> {
    if is_empty_input(value) {
        if !options.allow_empty {
            return Err(CoercionError::RequiredValue(RequiredKind::Array));
        }
        return Ok(Vec::new());
    }

    let items = match value {
        Value::Array(items) => items.clone(),
        Value::String(text) => text
            .split(',')
            .map(|piece| Value::String(piece.trim().to_string()))
            .collect(),
        other => vec![other.clone()],
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::ensure_string;
    use serde_json::json;

    fn array(value: Value) -> Vec<Value> {
        ensure_array(&value, EnsureOptions::default()).unwrap()
    }

    #[test]
    fn test_empty_values_become_empty_array() {
        assert_eq!(array(json!(null)), Vec::<Value>::new());
        assert_eq!(array(json!("")), Vec::<Value>::new());
        assert_eq!(array(json!([])), Vec::<Value>::new());
        assert_eq!(array(json!([[[]]])), vec![json!([[]])]);
    }

    #[test]
    fn test_empty_values_rejected_when_required() {
        for value in [json!(null), json!(""), json!([])] {
            let err = ensure_array(&value, EnsureOptions::required()).unwrap_err();
            assert_eq!(err, CoercionError::RequiredValue(RequiredKind::Array));
            assert_eq!(err.to_string(), "A non empty value is required.");
        }
    }

    #[test]
    fn test_scalars_are_wrapped() {
        assert_eq!(array(json!(5)), vec![json!(5)]);
        assert_eq!(array(json!(true)), vec![json!(true)]);
        assert_eq!(array(json!(0)), vec![json!(0)]);
        assert_eq!(array(json!(false)), vec![json!(false)]);
        assert_eq!(array(json!({"key": "value"})), vec![json!({"key": "value"})]);
    }

    #[test]
    fn test_strings_are_split_on_commas() {
        assert_eq!(
            array(json!("one,two,three")),
            vec![json!("one"), json!("two"), json!("three")]
        );
        assert_eq!(
            array(json!(" one , two ")),
            vec![json!("one"), json!("two")]
        );
        assert_eq!(
            array(json!("one,two,,")),
            vec![json!("one"), json!("two"), json!(""), json!("")]
        );
    }

    #[test]
    fn test_arrays_pass_through_unchanged() {
        assert_eq!(array(json!([1, 2, 3])), vec![json!(1), json!(2), json!(3)]);
        assert_eq!(array(json!([1, 1, [2]])), vec![json!(1), json!(1), json!([2])]);
    }

    #[test]
    fn test_string_round_trip_preserves_length() {
        let original = json!(["alpha", "beta", "gamma", "delta"]);
        let text = ensure_string(&original, EnsureOptions::default()).unwrap();
        let back = ensure_array(&Value::String(text), EnsureOptions::default()).unwrap();
        assert_eq!(back.len(), 4);
        assert_eq!(Value::Array(back), original);
    }
}
