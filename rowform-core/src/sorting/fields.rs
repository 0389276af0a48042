//! Sortable field types
//!
//! Each type is a zero-sized comparator factory for one kind of field.

use super::{
    Collation, RowComparator, SortOrder,
    keys::{TagSetKey, TextKey},
    traits::{FieldSource, FieldType},
};
use crate::error::SortError;
use serde_json::Value;

/// Plain text fields, ordered by locale-aware collation.
#[derive(Copy, Clone, Debug, Default)]
pub struct TextFieldType;

impl FieldType for TextFieldType {
    type Key<'a> = TextKey<'a>;
    const TYPE: &'static str = "text";

    fn extract_key(value: Option<&Value>) -> TextKey<'_> {
        TextKey::from_value(value)
    }
}

/// Multiple select fields holding `{id, value, color}` options.
#[derive(Copy, Clone, Debug, Default)]
pub struct MultipleSelectFieldType;

impl FieldType for MultipleSelectFieldType {
    type Key<'a> = TagSetKey<'a>;
    const TYPE: &'static str = "multiple_select";

    fn extract_key(value: Option<&Value>) -> TagSetKey<'_> {
        TagSetKey::from_value(value)
    }
}

/// Runtime dispatch from a stored field type identifier to its comparator.
pub fn comparator_for<T: FieldSource + 'static>(
    field_type: &str,
    field: &str,
    order: SortOrder,
    collation: &Collation,
) -> Result<RowComparator<T>, SortError> {
    if field_type == TextFieldType::TYPE {
        Ok(TextFieldType::get_sort(field, order, collation))
    } else if field_type == MultipleSelectFieldType::TYPE {
        Ok(MultipleSelectFieldType::get_sort(field, order, collation))
    } else {
        Err(SortError::UnknownFieldType(field_type.to_string()))
    }
}
