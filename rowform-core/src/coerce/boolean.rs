//! Boolean coercion against closed token sets

use crate::error::{CoercionError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

static DEFAULT_BOOLEAN_TOKENS: Lazy<BooleanTokens> = Lazy::new(BooleanTokens::default);

/// Closed sets of values accepted as `true` and `false`.
///
/// Built once (from defaults or configuration) and then shared read-only. Token
/// matching is type-strict: the string `"1"` and the number `1` are distinct
/// tokens, while `1` and `1.0` are the same number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BooleanTokens {
    true_values: Vec<Value>,
    false_values: Vec<Value>,
}

impl Default for BooleanTokens {
    fn default() -> Self {
        Self {
            true_values: vec![
                json!("t"),
                json!("T"),
                json!("y"),
                json!("Y"),
                json!("yes"),
                json!("Yes"),
                json!("YES"),
                json!("true"),
                json!("True"),
                json!("TRUE"),
                json!("on"),
                json!("On"),
                json!("ON"),
                json!("1"),
                json!(1),
                json!("checked"),
                json!(true),
            ],
            false_values: vec![
                json!("f"),
                json!("F"),
                json!("n"),
                json!("N"),
                json!("no"),
                json!("No"),
                json!("NO"),
                json!("false"),
                json!("False"),
                json!("FALSE"),
                json!("off"),
                json!("Off"),
                json!("OFF"),
                json!("0"),
                json!(0),
                json!("unchecked"),
                json!(false),
            ],
        }
    }
}

impl BooleanTokens {
    /// Token sets replacing the defaults entirely.
    pub fn new(true_values: Vec<Value>, false_values: Vec<Value>) -> Self {
        Self {
            true_values,
            false_values,
        }
    }

    /// These tokens plus the given extras.
    pub fn extended(
        mut self,
        true_values: impl IntoIterator<Item = Value>,
        false_values: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.true_values.extend(true_values);
        self.false_values.extend(false_values);
        self
    }

    /// Values read as `true`.
    pub fn true_values(&self) -> &[Value] {
        &self.true_values
    }

    /// Values read as `false`.
    pub fn false_values(&self) -> &[Value] {
        &self.false_values
    }

    /// Map the value onto `true`/`false` via the token sets.
    ///
    /// True tokens are checked first, so a value present in both sets is `true`.
    pub fn ensure(&self, value: &Value) -> Result<bool> {
        if self.true_values.iter().any(|token| same_value(token, value)) {
            Ok(true)
        } else if self.false_values.iter().any(|token| same_value(token, value)) {
            Ok(false)
        } else {
            Err(CoercionError::InvalidBoolean)
        }
    }
}

/// Coerce with the default token sets.
pub fn ensure_boolean(value: &Value) -> Result<bool> {
    DEFAULT_BOOLEAN_TOKENS.ensure(value)
}

fn same_value(token: &Value, value: &Value) -> bool {
    match (token, value) {
        (Value::Number(left), Value::Number(right)) => {
            match (left.as_i64(), right.as_i64()) {
                (Some(left), Some(right)) => left == right,
                _ => left.as_f64() == right.as_f64(),
            }
        }
        _ => token == value,
    }
}
