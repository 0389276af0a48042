//! Coercion of loosely-typed input into canonical values
//!
//! Form fields, query parameters and formula results reach business logic as
//! arbitrary JSON. The functions here normalize such input into one of four
//! canonical types or fail with a [`CoercionError`](crate::error::CoercionError):
//!
//! - [`ensure_integer`] / [`ensure_positive_integer`] → `i64`
//! - [`ensure_string`] / [`ensure_non_empty_string`] → `String`
//! - [`ensure_array`] → `Vec<Value>`
//! - [`ensure_boolean`] / [`BooleanTokens::ensure`] → `bool`
//!
//! Coercion is all-or-nothing: inputs are only borrowed and a failure never
//! carries a partial result.

pub mod array;
pub mod boolean;
pub mod integer;
pub mod text;

pub use array::ensure_array;
pub use boolean::{BooleanTokens, ensure_boolean};
pub use integer::{ensure_integer, ensure_positive_integer};
pub use text::{GENERIC_OBJECT_TOKEN, ensure_non_empty_string, ensure_string};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Empty-input policy for [`ensure_string`] and [`ensure_array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EnsureOptions {
    /// When false, `null`, `""` and `[]` are rejected instead of mapping to
    /// the zero value.
    pub allow_empty: bool,
}

impl Default for EnsureOptions {
    fn default() -> Self {
        Self { allow_empty: true }
    }
}

impl EnsureOptions {
    /// Options rejecting empty input.
    pub const fn required() -> Self {
        Self { allow_empty: false }
    }
}

/// `null`, the empty string and the empty array count as "no value".
pub(crate) fn is_empty_input(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
