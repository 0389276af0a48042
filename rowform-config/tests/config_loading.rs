use once_cell::sync::Lazy;
use rowform_config::{
    ConfigLoader, ConfigSource,
    loader::{COLLATION_LOCALE_VAR, CONFIG_JSON_VAR, CONFIG_PATH_VAR, load_from_file},
};
use rowform_core::sorting::CollationStrength;
use serde_json::json;
use std::{fs, sync::Mutex};
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn clear_env() {
    for var in [CONFIG_PATH_VAR, CONFIG_JSON_VAR, COLLATION_LOCALE_VAR] {
        // SAFETY: env mutation is serialized through ENV_LOCK
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
fn loads_toml_file_from_env_path() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_env();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[coercion]
extra_true_values = ["ja"]
extra_false_values = ["nein", 2]

[collation]
locale = "de"
strength = "primary"
"#,
    )
    .unwrap();

    unsafe { std::env::set_var(CONFIG_PATH_VAR, &path) };
    let result = ConfigLoader::new().with_search_root(dir.path()).load();
    clear_env();

    let (config, source) = result.unwrap();
    assert_eq!(source, ConfigSource::EnvPath(path));
    assert_eq!(config.collation.locale, "de");
    assert_eq!(config.collation.strength, CollationStrength::Primary);

    let tokens = config.boolean_tokens();
    assert_eq!(tokens.ensure(&json!("ja")), Ok(true));
    assert_eq!(tokens.ensure(&json!(2)), Ok(false));
    assert_eq!(tokens.ensure(&json!("yes")), Ok(true));
}

#[test]
fn env_path_wins_over_inline_json() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_env();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rowform.json");
    fs::write(&path, r#"{"collation": {"locale": "fr"}}"#).unwrap();

    unsafe {
        std::env::set_var(CONFIG_PATH_VAR, &path);
        std::env::set_var(CONFIG_JSON_VAR, r#"{"collation": {"locale": "es"}}"#);
    }
    let result = ConfigLoader::new().load();
    clear_env();

    let (config, _) = result.unwrap();
    assert_eq!(config.collation.locale, "fr");
}

#[test]
fn finds_default_file_under_config_dir() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_env();

    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/rowform.toml");
    fs::write(&path, "[collation]\nstrength = \"secondary\"\n").unwrap();

    unsafe { std::env::set_var(COLLATION_LOCALE_VAR, "sv") };
    let result = ConfigLoader::new().with_search_root(dir.path()).load();
    clear_env();

    let (config, source) = result.unwrap();
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.collation.locale, "sv");
    assert_eq!(config.collation.strength, CollationStrength::Secondary);
}

#[test]
fn missing_env_path_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_env();

    let dir = TempDir::new().unwrap();
    unsafe { std::env::set_var(CONFIG_PATH_VAR, dir.path().join("absent.toml")) };
    let result = ConfigLoader::new().load();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn extensionless_file_accepts_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rowformrc");
    fs::write(&path, r#"{"coercion": {"true_values": ["si"]}}"#).unwrap();

    let config = load_from_file(&path).unwrap();
    let tokens = config.boolean_tokens();
    assert_eq!(tokens.ensure(&json!("si")), Ok(true));
    assert!(tokens.ensure(&json!("yes")).is_err());
}

#[test]
fn malformed_toml_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[collation\nlocale = ").unwrap();

    let err = load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}
