//! Per-field validation rules

use crate::{
    coerce::{
        BooleanTokens, EnsureOptions, ensure_array, ensure_integer, ensure_positive_integer,
        ensure_string, is_empty_input,
    },
    error::CoercionError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Blank input for a required field.
    #[error("The value is required.")]
    Required,

    /// The value could not be coerced.
    #[error(transparent)]
    Invalid(#[from] CoercionError),

    /// A choice outside the field's options.
    #[error("{0} is not a valid option.")]
    NotAnOption(String),
}

/// Validation rule attached to one form field.
///
/// Blank input (`null`, `""`, `[]`) is accepted as `null` unless the rule is
/// `required`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldRule {
    /// Text input validated as an integer.
    Integer {
        #[serde(default)]
        required: bool,
        #[serde(default)]
        non_negative: bool,
    },
    /// Free text.
    Text {
        #[serde(default)]
        required: bool,
    },
    /// Checkbox; a required checkbox must be checked.
    Boolean {
        #[serde(default)]
        required: bool,
    },
    /// Single or multiple choice among fixed option values.
    Choice {
        options: Vec<String>,
        #[serde(default)]
        multiple: bool,
        #[serde(default)]
        required: bool,
    },
}

impl FieldRule {
    /// Whether blank input is rejected.
    pub fn is_required(&self) -> bool {
        match self {
            FieldRule::Integer { required, .. }
            | FieldRule::Text { required }
            | FieldRule::Boolean { required }
            | FieldRule::Choice { required, .. } => *required,
        }
    }

    /// Coerce a submitted value into its cleaned form.
    pub fn clean(&self, value: &Value, tokens: &BooleanTokens) -> Result<Value, FieldError> {
        match self {
            FieldRule::Boolean { required } => {
                let checked = if is_empty_input(value) {
                    false
                } else {
                    tokens.ensure(value)?
                };
                if *required && !checked {
                    return Err(FieldError::Required);
                }
                Ok(Value::Bool(checked))
            }
            FieldRule::Choice {
                options,
                multiple: true,
                required,
            } => {
                let selected = ensure_array(value, EnsureOptions::default())?;
                if selected.is_empty() {
                    return if *required {
                        Err(FieldError::Required)
                    } else {
                        Ok(Value::Array(Vec::new()))
                    };
                }

                let mut cleaned = Vec::with_capacity(selected.len());
                for item in &selected {
                    let text = ensure_string(item, EnsureOptions::default())?;
                    if !options.contains(&text) {
                        return Err(FieldError::NotAnOption(text));
                    }
                    cleaned.push(Value::String(text));
                }
                Ok(Value::Array(cleaned))
            }
            _ if is_empty_input(value) => {
                if self.is_required() {
                    Err(FieldError::Required)
                } else {
                    Ok(Value::Null)
                }
            }
            FieldRule::Integer { non_negative, .. } => {
                let integer = if *non_negative {
                    ensure_positive_integer(value)?
                } else {
                    ensure_integer(value)?
                };
                Ok(Value::from(integer))
            }
            FieldRule::Text { .. } => {
                Ok(Value::String(ensure_string(value, EnsureOptions::default())?))
            }
            FieldRule::Choice { options, .. } => {
                let text = ensure_string(value, EnsureOptions::default())?;
                if options.contains(&text) {
                    Ok(Value::String(text))
                } else {
                    Err(FieldError::NotAnOption(text))
                }
            }
        }
    }
}
