//! Sorting module for client-side row ordering
//!
//! This module provides:
//! - Core traits for sortable rows and per field-type sort keys
//! - Field-type comparator factories (`text`, `multiple_select`)
//! - Locale-aware string collation
//! - Composable comparators and serializable sort criteria

pub mod collation;
pub mod comparator;
pub mod criteria;
pub mod fields;
pub mod keys;
pub mod order;
pub mod traits;


pub use collation::{Collation, CollationStrength};
pub use comparator::{RowComparator, sort_rows};
pub use criteria::{SortCriteria, SortSpec};
pub use fields::{MultipleSelectFieldType, TextFieldType, comparator_for};
pub use keys::{TagSetKey, TextKey};
pub use order::SortOrder;
pub use traits::{FieldSource, FieldType, SortKey};
