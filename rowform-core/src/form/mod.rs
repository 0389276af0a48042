//! Composite form validation
//!
//! A form is a tree of [`FormNode`]s. Each node owns the rules for its own
//! fields plus any number of child forms; validity folds over the whole tree
//! and cleaned values from every node are merged into one map.

pub mod rules;

pub use rules::{FieldError, FieldRule};

use crate::coerce::BooleanTokens;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// One rejected field, addressed by its dotted path in the form tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path, e.g. `order.shipping.speed`.
    pub path: String,
    /// Why the field was rejected.
    pub error: FieldError,
}

/// Every field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid form data: {}", summarize(.issues))]
pub struct FormErrors {
    /// Failing fields in tree order.
    pub issues: Vec<FieldIssue>,
}

impl FormErrors {
    /// First error recorded for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.issues
            .iter()
            .find(|issue| issue.path == path)
            .map(|issue| &issue.error)
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.path, issue.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A form, or a child form nested inside one.
#[derive(Debug, Clone, Default)]
pub struct FormNode {
    name: String,
    fields: Vec<(String, FieldRule)>,
    allowed_keys: Option<BTreeSet<String>>,
    children: Vec<FormNode>,
}

impl FormNode {
    /// Empty node; the name becomes a segment of error paths.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a field and its rule.
    pub fn field(mut self, key: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push((key.into(), rule));
        self
    }

    /// Restrict this node to the given keys; other declared fields are
    /// neither validated nor returned.
    pub fn allow_only<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Nest a child form.
    pub fn child(mut self, child: FormNode) -> Self {
        self.children.push(child);
        self
    }

    fn is_allowed_key(&self, key: &str) -> bool {
        self.allowed_keys
            .as_ref()
            .is_none_or(|allowed| allowed.contains(key))
    }

    fn active_fields(&self) -> impl Iterator<Item = &(String, FieldRule)> {
        self.fields.iter().filter(|(key, _)| self.is_allowed_key(key))
    }

    /// Raw submitted values for this node and its children.
    ///
    /// Child values are merged over the parent's, so a child wins on a key
    /// clash.
    pub fn form_values(&self, submitted: &Map<String, Value>) -> Map<String, Value> {
        let mut values: Map<String, Value> = self
            .active_fields()
            .filter_map(|(key, _)| {
                submitted.get(key).map(|value| (key.clone(), value.clone()))
            })
            .collect();

        for child in &self.children {
            values.extend(child.form_values(submitted));
        }
        values
    }

    /// Validate the whole tree, returning the merged cleaned values or every
    /// failing field.
    pub fn validate(
        &self,
        submitted: &Map<String, Value>,
        tokens: &BooleanTokens,
    ) -> Result<Map<String, Value>, FormErrors> {
        let mut cleaned = Map::new();
        let mut issues = Vec::new();
        self.collect(submitted, tokens, "", &mut cleaned, &mut issues);

        if issues.is_empty() {
            Ok(cleaned)
        } else {
            debug!(form = %self.name, issues = issues.len(), "form validation failed");
            Err(FormErrors { issues })
        }
    }

    /// Whether [`FormNode::validate`] would succeed.
    pub fn is_valid(&self, submitted: &Map<String, Value>, tokens: &BooleanTokens) -> bool {
        self.validate(submitted, tokens).is_ok()
    }

    fn collect(
        &self,
        submitted: &Map<String, Value>,
        tokens: &BooleanTokens,
        prefix: &str,
        cleaned: &mut Map<String, Value>,
        issues: &mut Vec<FieldIssue>,
    ) {
        let prefix = join_path(prefix, &self.name);

        for (key, rule) in self.active_fields() {
            let value = submitted.get(key).unwrap_or(&Value::Null);
            match rule.clean(value, tokens) {
                Ok(value) => {
                    cleaned.insert(key.clone(), value);
                }
                Err(error) => issues.push(FieldIssue {
                    path: join_path(&prefix, key),
                    error,
                }),
            }
        }

        for child in &self.children {
            child.collect(submitted, tokens, &prefix, cleaned, issues);
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{name}"),
    }
}
