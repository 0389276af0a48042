//! Locale-aware string comparison
//!
//! Text ordering follows the Unicode Collation Algorithm rather than code-point
//! order, so accented and non-Latin characters land where a database's
//! locale-aware `ORDER BY` would put them.

use crate::error::SortError;
use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use icu_locale_core::Locale;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::Arc};

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

static DEFAULT_COLLATION: Lazy<Collation> = Lazy::new(|| {
    Collation::new(DEFAULT_LOCALE, CollationStrength::default())
        .expect("compiled collation data should cover the default locale")
});

/// Comparison level at which strings are considered different.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollationStrength {
    /// Base letters only.
    Primary,
    /// Base letters and accents.
    Secondary,
    /// Base letters, accents and case.
    #[default]
    Tertiary,
    /// Tertiary plus punctuation when alternate shifting is on.
    Quaternary,
    /// Code point tie-break after all other levels.
    Identical,
}

impl From<CollationStrength> for Strength {
    fn from(value: CollationStrength) -> Self {
        match value {
            CollationStrength::Primary => Strength::Primary,
            CollationStrength::Secondary => Strength::Secondary,
            CollationStrength::Tertiary => Strength::Tertiary,
            CollationStrength::Quaternary => Strength::Quaternary,
            CollationStrength::Identical => Strength::Identical,
        }
    }
}

/// Shared, immutable collator.
#[derive(Clone)]
pub struct Collation {
    collator: Arc<CollatorBorrowed<'static>>,
    locale: Arc<str>,
    strength: CollationStrength,
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale)
            .field("strength", &self.strength)
            .finish()
    }
}

impl Default for Collation {
    fn default() -> Self {
        DEFAULT_COLLATION.clone()
    }
}

impl Collation {
    /// Build a collator for a BCP-47 locale tag such as `en` or `de-AT`.
    pub fn new(locale: &str, strength: CollationStrength) -> Result<Self, SortError> {
        let parsed: Locale = locale.parse().map_err(|err| {
            SortError::Collation(format!("invalid locale '{locale}': {err}"))
        })?;

        let mut options = CollatorOptions::default();
        options.strength = Some(strength.into());

        let collator = Collator::try_new(CollatorPreferences::from(&parsed), options)
            .map_err(|err| {
                SortError::Collation(format!("no collation data for '{locale}': {err}"))
            })?;

        Ok(Self {
            collator: Arc::new(collator),
            locale: Arc::from(locale),
            strength,
        })
    }

    /// The locale tag this collator was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Comparison strength.
    pub fn strength(&self) -> CollationStrength {
        self.strength
    }

    /// Collated three-way comparison.
    #[inline]
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}
