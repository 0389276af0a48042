//! # Rowform Core
//!
//! Core library for the rowform application builder: the precise, reusable
//! logic that page components and data-source services call into.
//!
//! ## Overview
//!
//! - **Coercion**: normalize loosely-typed input (form fields, query
//!   parameters, formula results) into integers, strings, arrays or booleans
//! - **Sorting**: per field-type comparator factories with locale-aware
//!   collation, composable into multi-key sorts over fetched rows
//! - **Forms**: a composite validator tree applying coercion rules to
//!   submitted form data
//!
//! All three are pure and synchronous; every public type is `Send + Sync`.
//!
//! ## Examples
//!
//! ```
//! use rowform_core::{
//!     coerce::{EnsureOptions, ensure_array, ensure_integer},
//!     sorting::{Collation, FieldType, MultipleSelectFieldType, SortOrder, sort_rows},
//! };
//! use serde_json::json;
//!
//! assert_eq!(ensure_integer(&json!("42")).unwrap(), 42);
//! assert_eq!(
//!     ensure_array(&json!("a, b"), EnsureOptions::default()).unwrap(),
//!     vec![json!("a"), json!("b")]
//! );
//!
//! let mut rows = vec![
//!     json!({"id": 1, "tags": [{"id": 1, "value": "B", "color": "red"}]}),
//!     json!({"id": 2, "tags": []}),
//! ];
//! let collation = Collation::default();
//! let sort = MultipleSelectFieldType::get_sort("tags", SortOrder::Ascending, &collation);
//! sort_rows(&mut rows, &sort);
//! assert_eq!(rows[0]["id"], 2);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Value coercion and validation
pub mod coerce;
/// Error types
pub mod error;
/// Composite form validation
pub mod form;
/// Collation-aware row sorting
pub mod sorting;

pub use error::{CoercionError, RequiredKind, Result, SortError};
