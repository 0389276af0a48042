//! Error types for coercion and sorting

use std::fmt;
use thiserror::Error;

/// Which coercion demanded a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredKind {
    /// [`ensure_string`](crate::coerce::ensure_string) got empty input.
    String,
    /// [`ensure_array`](crate::coerce::ensure_array) got empty input.
    Array,
}

impl fmt::Display for RequiredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredKind::String => f.write_str("A valid String is required."),
            RequiredKind::Array => f.write_str("A non empty value is required."),
        }
    }
}

/// Failure to coerce a value into its canonical type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// The value (rendered as text) has no integer reading.
    #[error("Value '{0}' is not a valid integer or convertible to an integer.")]
    InvalidInteger(String),

    /// The integer was below zero where a non-negative one was required.
    #[error("Value is not a positive integer.")]
    NegativeValue(i64),

    /// Empty input where the caller disallowed it.
    #[error("{0}")]
    RequiredValue(RequiredKind),

    /// The value is in neither boolean token set.
    #[error("Value is not a valid boolean or convertible to a boolean.")]
    InvalidBoolean,
}

/// Failure to build a row comparator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// No comparator exists for this field type identifier.
    #[error("Unknown sortable field type: {0}")]
    UnknownFieldType(String),

    /// Direction other than ASC/DESC.
    #[error("Unknown sort order: {0}")]
    UnknownOrder(String),

    /// The collator could not be built for the requested locale.
    #[error("Collation error: {0}")]
    Collation(String),
}

/// Result of a coercion.
pub type Result<T> = std::result::Result<T, CoercionError>;
