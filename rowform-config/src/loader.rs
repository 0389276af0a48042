//! Config resolution from the environment, files and defaults

use crate::{models::Config, util::parse_csv};
use anyhow::{Context, anyhow};
use serde_json::Value;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "ROWFORM_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "ROWFORM_CONFIG_JSON";
/// Overrides the configured collation locale.
pub const COLLATION_LOCALE_VAR: &str = "ROWFORM_COLLATION_LOCALE";
/// Comma separated string tokens appended to the `true` set.
pub const EXTRA_TRUE_VALUES_VAR: &str = "ROWFORM_EXTRA_TRUE_VALUES";
/// Comma separated string tokens appended to the `false` set.
pub const EXTRA_FALSE_VALUES_VAR: &str = "ROWFORM_EXTRA_FALSE_VALUES";

const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "rowform.toml",
    "rowform.json",
    "config/rowform.toml",
    "config/rowform.json",
];

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; nothing was configured.
    #[default]
    Default,
    /// File named by `$ROWFORM_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `$ROWFORM_CONFIG_JSON`.
    EnvInline,
    /// A default file found under the search root.
    File(PathBuf),
}

/// Resolves configuration from the environment and well-known files.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_root: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            search_root: PathBuf::from("."),
        }
    }
}

impl ConfigLoader {
    /// Loader searching the working directory for default files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the default file candidates are resolved against.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Load configuration using the process environment.
    ///
    /// Evaluation order:
    /// 1) `$ROWFORM_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ROWFORM_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults if none of the above is set.
    ///
    /// Environment overrides (`$ROWFORM_COLLATION_LOCALE`, extra boolean
    /// tokens) are applied on top of whichever source won.
    pub fn load(&self) -> anyhow::Result<(Config, ConfigSource)> {
        self.load_with(|name| env::var(name).ok())
    }

    /// [`ConfigLoader::load`] with an explicit variable lookup.
    pub fn load_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Config, ConfigSource)> {
        let non_blank = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());

        let (mut config, source) = if let Some(path) = non_blank(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path);
            (load_from_file(&path)?, ConfigSource::EnvPath(path))
        } else if let Some(raw) = non_blank(CONFIG_JSON_VAR) {
            let parsed = parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            (parsed, ConfigSource::EnvInline)
        } else if let Some(path) = self.find_default_file() {
            (load_from_file(&path)?, ConfigSource::File(path))
        } else {
            (Config::default(), ConfigSource::Default)
        };

        if let Some(locale) = non_blank(COLLATION_LOCALE_VAR) {
            debug!(locale = %locale, "collation locale overridden from environment");
            config.collation.locale = locale.trim().to_string();
        }
        if let Some(extra) = lookup(EXTRA_TRUE_VALUES_VAR).map(|raw| parse_csv(&raw)) {
            config
                .coercion
                .extra_true_values
                .extend(extra.into_iter().map(Value::String));
        }
        if let Some(extra) = lookup(EXTRA_FALSE_VALUES_VAR).map(|raw| parse_csv(&raw)) {
            config
                .coercion
                .extra_false_values
                .extend(extra.into_iter().map(Value::String));
        }

        // Fail early on a locale the collator cannot use.
        config.collation()?;

        info!(source = ?source, locale = %config.collation.locale, "loaded rowform config");
        Ok((config, source))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

/// Read a config file, picking the format from its extension.
///
/// Files without a recognised extension are tried as TOML, then JSON.
pub fn load_from_file(path: &Path) -> anyhow::Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read rowform config from {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents)
            .with_context(|| format!("invalid rowform config {}", path.display())),
        Some("toml") | Some("tml") => toml::from_str(&contents)
            .map_err(|err| anyhow!("invalid rowform config {}: {}", path.display(), err)),
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

/// Parse config text of unknown format; `origin` names it in errors.
pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Config> {
    // Try TOML first, then JSON for convenience.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse rowform config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

/// Parse a JSON config document.
pub fn parse_json(raw: &str) -> anyhow::Result<Config> {
    serde_json::from_str(raw).map_err(|err| anyhow!("invalid rowform config json: {err}"))
}
