//! Core traits for sortable rows
//!
//! Rows expose field values by identifier; field types turn those values into
//! sort keys and sort keys compare under a [`Collation`].

use super::{Collation, RowComparator, SortOrder};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A record whose fields can be looked up by identifier (e.g. `field_275`).
pub trait FieldSource {
    /// The raw value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|row| row.get(name))
    }
}

/// Keys that can be compared for sorting
///
/// Keys are total: any value a field type cannot interpret becomes the empty
/// key instead of an error.
pub trait SortKey: Clone + Send + Sync {
    /// Key for missing/null data.
    fn empty() -> Self;

    /// Whether this is the empty key.
    fn is_empty(&self) -> bool;

    /// Ascending comparison.
    fn collate(&self, other: &Self, collation: &Collation) -> Ordering;

    /// Comparison in the given direction; descending reverses the full result.
    #[inline]
    fn compare_with_order(
        &self,
        other: &Self,
        order: SortOrder,
        collation: &Collation,
    ) -> Ordering {
        order.apply(self.collate(other, collation))
    }
}

/// A sortable field type with its key extraction rule
///
/// Each field type names itself with [`FieldType::TYPE`] (the identifier used
/// by stored sort criteria) and acts as a comparator factory via
/// [`FieldType::get_sort`].
pub trait FieldType: Send + Sync + 'static {
    /// The key extracted from this field type's values, borrowing from the row.
    type Key<'a>: SortKey;

    /// Field type identifier, e.g. `"text"`.
    const TYPE: &'static str;

    /// Extract the key from a raw field value (`None` when the row lacks it).
    fn extract_key(value: Option<&Value>) -> Self::Key<'_>;

    /// Comparator ordering rows by the named field.
    fn get_sort<T: FieldSource + 'static>(
        field: &str,
        order: SortOrder,
        collation: &Collation,
    ) -> RowComparator<T>
    where
        Self: Sized,
    {
        let name = field.to_string();
        let collation = collation.clone();
        RowComparator::new(format!("{field} {order}"), move |a: &T, b: &T| {
            let left = Self::extract_key(a.field(&name));
            let right = Self::extract_key(b.field(&name));
            left.compare_with_order(&right, order, &collation)
        })
    }
}
