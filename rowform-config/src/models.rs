//! Configuration data model

use anyhow::Context;
use rowform_core::{
    coerce::BooleanTokens,
    sorting::{Collation, CollationStrength, collation::DEFAULT_LOCALE},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Top-level rowform settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// `[coercion]` table.
    pub coercion: CoercionConfig,
    /// `[collation]` table.
    pub collation: CollationConfig,
}

/// Token sets used by boolean coercion.
///
/// `true_values` / `false_values` replace the built-in sets when present;
/// `extra_true_values` / `extra_false_values` are appended to whichever sets
/// are in effect.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoercionConfig {
    /// Replacement `true` set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_values: Option<Vec<Value>>,
    /// Replacement `false` set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_values: Option<Vec<Value>>,
    /// Appended to the `true` set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_true_values: Vec<Value>,
    /// Appended to the `false` set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_false_values: Vec<Value>,
}

impl CoercionConfig {
    /// The effective token sets.
    pub fn boolean_tokens(&self) -> BooleanTokens {
        let defaults = BooleanTokens::default();
        let true_values = self
            .true_values
            .clone()
            .unwrap_or_else(|| defaults.true_values().to_vec());
        let false_values = self
            .false_values
            .clone()
            .unwrap_or_else(|| defaults.false_values().to_vec());

        BooleanTokens::new(true_values, false_values).extended(
            self.extra_true_values.iter().cloned(),
            self.extra_false_values.iter().cloned(),
        )
    }
}

/// Collation used by text and tag-set sorting. The locale is a BCP-47 tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollationConfig {
    /// BCP-47 locale tag, `en` by default.
    pub locale: String,
    /// Comparison strength, tertiary by default.
    pub strength: CollationStrength,
}

impl Default for CollationConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            strength: CollationStrength::default(),
        }
    }
}

impl CollationConfig {
    /// Build the collator these settings describe.
    pub fn build(&self) -> anyhow::Result<Collation> {
        Collation::new(&self.locale, self.strength)
            .with_context(|| format!("invalid collation settings for locale '{}'", self.locale))
    }
}

impl Config {
    /// See [`CoercionConfig::boolean_tokens`].
    pub fn boolean_tokens(&self) -> BooleanTokens {
        self.coercion.boolean_tokens()
    }

    /// See [`CollationConfig::build`].
    pub fn collation(&self) -> anyhow::Result<Collation> {
        self.collation.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.boolean_tokens(), BooleanTokens::default());
        assert_eq!(config.collation.locale, "en");
        assert_eq!(config.collation.strength, CollationStrength::Tertiary);
    }

    #[test]
    fn test_replacement_and_extra_tokens() {
        let config = CoercionConfig {
            true_values: Some(vec![json!("si")]),
            false_values: None,
            extra_true_values: vec![json!("vrai")],
            extra_false_values: vec![json!("faux")],
        };
        let tokens = config.boolean_tokens();
        assert_eq!(tokens.ensure(&json!("si")), Ok(true));
        assert_eq!(tokens.ensure(&json!("vrai")), Ok(true));
        assert!(tokens.ensure(&json!("yes")).is_err());
        assert_eq!(tokens.ensure(&json!("faux")), Ok(false));
        assert_eq!(tokens.ensure(&json!("no")), Ok(false));
    }

    #[test]
    fn test_bad_locale_fails_to_build() {
        let config = CollationConfig {
            locale: "??".into(),
            strength: CollationStrength::Primary,
        };
        assert!(config.build().is_err());
    }
}
