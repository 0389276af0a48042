//! Composable row comparators

use std::{cmp::Ordering, fmt, sync::Arc};
use tracing::{debug, trace};

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A reusable two-argument ordering function over rows of type `T`.
///
/// Comparators are immutable and cheap to clone; chaining with
/// [`RowComparator::then_by`] applies the next comparator only when every
/// previous one reports `Equal`.
pub struct RowComparator<T> {
    compare: Arc<CompareFn<T>>,
    description: Arc<str>,
}

impl<T> Clone for RowComparator<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            description: Arc::clone(&self.description),
        }
    }
}

impl<T> fmt::Debug for RowComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowComparator")
            .field("description", &self.description)
            .finish()
    }
}

impl<T: 'static> RowComparator<T> {
    /// Comparator from a closure, labelled for logs.
    pub fn new(
        description: impl Into<String>,
        compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self {
            compare: Arc::new(compare),
            description: Arc::from(description.into()),
        }
    }

    /// Comparator that considers every pair of rows equal.
    pub fn unordered() -> Self {
        Self::new("unordered", |_: &T, _: &T| Ordering::Equal)
    }

    /// Compare two rows.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Human-readable summary such as `field_275 ASC, field_272 DESC`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Chain a tie-breaking comparator.
    pub fn then_by(self, next: RowComparator<T>) -> Self {
        let description = format!("{}, {}", self.description, next.description);
        let first = self.compare;
        let second = next.compare;
        Self::new(description, move |a: &T, b: &T| {
            first(a, b).then_with(|| second(a, b))
        })
    }

    /// The exact reverse of this comparator's total order.
    pub fn reversed(self) -> Self {
        let description = format!("reverse({})", self.description);
        let inner = self.compare;
        Self::new(description, move |a: &T, b: &T| inner(b, a))
    }
}

/// Stable in-place sort of `rows`.
///
/// Rows already in order are left untouched, so re-sorting is a no-op.
pub fn sort_rows<T: 'static>(rows: &mut [T], comparator: &RowComparator<T>) {
    if rows.is_sorted_by(|a, b| comparator.compare(a, b).is_le()) {
        trace!(
            rows = rows.len(),
            sort = comparator.description(),
            "rows already sorted"
        );
        return;
    }

    debug!(
        rows = rows.len(),
        sort = comparator.description(),
        "sorting rows"
    );
    rows.sort_by(|a, b| comparator.compare(a, b));
}
