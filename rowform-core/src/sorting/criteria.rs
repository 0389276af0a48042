//! Stored multi-key sort criteria

use super::{Collation, RowComparator, SortOrder, fields::comparator_for, traits::FieldSource};
use crate::error::SortError;
use serde::{Deserialize, Serialize};

/// One sort key: which field, which field type, which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field identifier in the row, e.g. `field_272`.
    pub field: String,
    /// Field type identifier, e.g. `text`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Direction, ascending when omitted.
    #[serde(default)]
    pub order: SortOrder,
}

/// Ordered list of sort keys, primary first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortCriteria {
    /// Keys, primary first.
    pub sorts: Vec<SortSpec>,
}

impl SortCriteria {
    /// No keys; sorting keeps input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tie-breaking sort key.
    pub fn then_by(
        mut self,
        field: impl Into<String>,
        field_type: impl Into<String>,
        order: SortOrder,
    ) -> Self {
        self.sorts.push(SortSpec {
            field: field.into(),
            field_type: field_type.into(),
            order,
        });
        self
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Compose the comparators for every key.
    ///
    /// Empty criteria produce a comparator that keeps rows in input order.
    pub fn comparator<T: FieldSource + 'static>(
        &self,
        collation: &Collation,
    ) -> Result<RowComparator<T>, SortError> {
        let mut sorts = self.sorts.iter();
        let Some(first) = sorts.next() else {
            return Ok(RowComparator::unordered());
        };

        let mut comparator =
            comparator_for(&first.field_type, &first.field, first.order, collation)?;
        for spec in sorts {
            comparator = comparator.then_by(comparator_for(
                &spec.field_type,
                &spec.field,
                spec.order,
                collation,
            )?);
        }
        Ok(comparator)
    }
}
