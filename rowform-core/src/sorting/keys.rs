//! Sort key types for comparing rows
//!
//! Keys borrow from the row they were extracted from, so building one per
//! comparison costs no allocation for string and tag-set values. Missing data
//! is treated as empty rather than failing.

use super::{Collation, traits::SortKey};
use crate::coerce::text::render_number;
use serde_json::Value;
use std::{borrow::Cow, cmp::Ordering};

/// String key for text-like fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextKey<'a>(Cow<'a, str>);

impl<'a> TextKey<'a> {
    /// Key for a raw value; arrays and objects have no text form here.
    ///
    /// Only numbers allocate, for their rendered text.
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::String(text)) => TextKey(Cow::Borrowed(text)),
            Some(Value::Number(number)) => TextKey(Cow::Owned(render_number(number))),
            Some(Value::Bool(true)) => TextKey(Cow::Borrowed("true")),
            Some(Value::Bool(false)) => TextKey(Cow::Borrowed("false")),
            _ => TextKey::empty(),
        }
    }

    /// The key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SortKey for TextKey<'_> {
    fn empty() -> Self {
        TextKey(Cow::Borrowed(""))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn collate(&self, other: &Self, collation: &Collation) -> Ordering {
        collation.compare(&self.0, &other.0)
    }
}

/// Key for tag-set (multiple select) fields: a view over the row's options.
///
/// Ordering is element-wise collated comparison of the option values where a
/// proper prefix sorts first, so `[]` < `["A"]` < `["A", "B"]` < `["C"]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TagSetKey<'a>(&'a [Value]);

impl<'a> TagSetKey<'a> {
    /// Key for a raw value holding `{id, value, color}` option objects.
    ///
    /// Bare strings are accepted as options; anything that is not an array
    /// yields the empty set.
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Array(options)) => TagSetKey(options),
            _ => TagSetKey::empty(),
        }
    }

    /// Option values in their stored order.
    pub fn values(&self) -> impl Iterator<Item = TextKey<'a>> {
        let options = self.0;
        options.iter().map(|option| match option {
            Value::Object(option) => TextKey::from_value(option.get("value")),
            other => TextKey::from_value(Some(other)),
        })
    }
}

impl SortKey for TagSetKey<'_> {
    fn empty() -> Self {
        TagSetKey(&[])
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn collate(&self, other: &Self, collation: &Collation) -> Ordering {
        let mut left = self.values();
        let mut right = other.values();
        loop {
            match (left.next(), right.next()) {
                (Some(l), Some(r)) => {
                    let cmp = collation.compare(l.as_str(), r.as_str());
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                }
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::SortOrder;
    use serde_json::json;

    fn options(values: &[&str]) -> Value {
        Value::Array(
            values
                .iter()
                .enumerate()
                .map(|(id, value)| json!({"id": id, "value": value, "color": "blue"}))
                .collect(),
        )
    }

    fn collate(left: &[&str], right: &[&str]) -> Ordering {
        let (left, right) = (options(left), options(right));
        TagSetKey::from_value(Some(&left))
            .collate(&TagSetKey::from_value(Some(&right)), &Collation::default())
    }

    #[test]
    fn test_missing_values_are_empty() {
        assert!(TextKey::from_value(None).is_empty());
        assert!(TextKey::from_value(Some(&json!(null))).is_empty());
        assert!(TextKey::from_value(Some(&json!({"a": 1}))).is_empty());
        assert!(TagSetKey::from_value(None).is_empty());
        assert!(TagSetKey::from_value(Some(&json!("A"))).is_empty());
    }

    #[test]
    fn test_text_key_from_scalars() {
        assert_eq!(TextKey::from_value(Some(&json!(12))).as_str(), "12");
        assert_eq!(TextKey::from_value(Some(&json!(true))).as_str(), "true");
    }

    #[test]
    fn test_string_keys_borrow_from_the_row() {
        let row = json!({"name": "Tesla"});
        let key = TextKey::from_value(row.get("name"));
        assert!(matches!(key.0, Cow::Borrowed("Tesla")));
    }

    #[test]
    fn test_tag_set_extracts_option_values() {
        let value = json!([
            {"id": 149, "value": "F", "color": "light-gray"},
            {"id": 148, "value": "E", "color": "dark-red"},
            "G",
        ]);
        let key = TagSetKey::from_value(Some(&value));
        let values: Vec<_> = key.values().map(|value| value.as_str().to_string()).collect();
        assert_eq!(values, ["F", "E", "G"]);
    }

    #[test]
    fn test_tag_set_prefix_sorts_first() {
        assert_eq!(collate(&[], &["A"]), Ordering::Less);
        assert_eq!(collate(&["A"], &["A", "B"]), Ordering::Less);
        assert_eq!(collate(&["A", "B", "C"], &["C"]), Ordering::Less);
        assert_eq!(collate(&["F", "A"], &["F", "E"]), Ordering::Less);
        assert_eq!(collate(&["A"], &["A"]), Ordering::Equal);
    }

    #[test]
    fn test_descending_reverses_total_order() {
        let collation = Collation::default();
        let (short, long, empty) = (options(&["C"]), options(&["A", "B", "C"]), options(&[]));
        let short = TagSetKey::from_value(Some(&short));
        let long = TagSetKey::from_value(Some(&long));
        let empty = TagSetKey::from_value(Some(&empty));

        assert_eq!(
            long.compare_with_order(&short, SortOrder::Descending, &collation),
            Ordering::Greater
        );
        assert_eq!(
            empty.compare_with_order(&short, SortOrder::Descending, &collation),
            Ordering::Greater
        );
    }
}
