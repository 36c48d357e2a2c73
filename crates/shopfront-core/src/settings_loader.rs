//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `SHOPFRONT_DEBUG` | `debug` |
//! | `SHOPFRONT_LOG_LEVEL` | `log_level` |
//! | `SHOPFRONT_LANGUAGE_CODE` | `language_code` |
//! | `SHOPFRONT_USE_L10N` | `use_l10n` |
//! | `SHOPFRONT_MEDIA_URL` | `media_url` |
//! | `SHOPFRONT_DATE_INPUT_FORMATS` | `date_input_formats` (`;`-separated) |
//! | `SHOPFRONT_TIME_INPUT_FORMATS` | `time_input_formats` (`;`-separated) |
//! | `SHOPFRONT_DATETIME_INPUT_FORMATS` | `datetime_input_formats` (`;`-separated) |
//!
//! Format lists use `;` as separator because a format such as `%b %d, %Y`
//! may itself contain a comma.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use shopfront_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/shopfront.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::ShopfrontError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, ShopfrontError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| ShopfrontError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, ShopfrontError> {
    let content = read_config_file(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, ShopfrontError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> Result<Settings, ShopfrontError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| ShopfrontError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, ShopfrontError> {
    let content = read_config_file(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, ShopfrontError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `SHOPFRONT_*` environment variable overrides to a settings struct.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("SHOPFRONT_DEBUG") {
        settings.debug = parse_flag(&val);
    }

    if let Ok(val) = std::env::var("SHOPFRONT_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("SHOPFRONT_LANGUAGE_CODE") {
        settings.language_code = val;
    }

    if let Ok(val) = std::env::var("SHOPFRONT_USE_L10N") {
        settings.use_l10n = parse_flag(&val);
    }

    if let Ok(val) = std::env::var("SHOPFRONT_MEDIA_URL") {
        settings.media_url = val;
    }

    if let Some(formats) = env_format_list("SHOPFRONT_DATE_INPUT_FORMATS") {
        settings.date_input_formats = formats;
    }

    if let Some(formats) = env_format_list("SHOPFRONT_TIME_INPUT_FORMATS") {
        settings.time_input_formats = formats;
    }

    if let Some(formats) = env_format_list("SHOPFRONT_DATETIME_INPUT_FORMATS") {
        settings.datetime_input_formats = formats;
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config_file(path: &Path, kind: &str) -> Result<String, ShopfrontError> {
    std::fs::read_to_string(path).map_err(|e| {
        ShopfrontError::ConfigurationError(format!(
            "Failed to read {kind} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(
    value: serde_json::Value,
    kind: &str,
) -> Result<Settings, ShopfrontError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        ShopfrontError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        ShopfrontError::ConfigurationError(format!(
            "Failed to deserialize settings from {kind}: {e}"
        ))
    })
}

fn parse_flag(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Reads a `;`-separated list of formats; blank entries are dropped and an
/// all-blank value leaves the setting untouched.
fn env_format_list(var: &str) -> Option<Vec<String>> {
    let val = std::env::var(var).ok()?;
    let formats: Vec<String> = val
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if formats.is_empty() {
        None
    } else {
        Some(formats)
    }
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = match base_map.remove(&key) {
                    Some(base_v) => merge_json(base_v, override_v),
                    None => override_v,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = false
            language_code = "de"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.language_code, "de");
        assert_eq!(settings.media_url, "/media/");
    }

    #[test]
    fn test_from_toml_str_input_formats() {
        let toml = r#"
            date_input_formats = ["%d/%m/%Y", "%d.%m.%Y"]
            datetime_input_formats = ["%d/%m/%Y %H:%M"]
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.date_input_formats, vec!["%d/%m/%Y", "%d.%m.%Y"]);
        assert_eq!(settings.datetime_input_formats, vec!["%d/%m/%Y %H:%M"]);
        // untouched list keeps its defaults
        assert_eq!(settings.time_input_formats[0], "%H:%M:%S");
    }

    #[test]
    fn test_from_toml_str_extra() {
        let toml = r#"
            [extra]
            lookup_page_size = 20
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.extra["lookup_page_size"], 20);
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("[[invalid toml content");
        assert!(matches!(result, Err(ShopfrontError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let result = from_toml_str("date_input_formats = 3");
        assert!(result.is_err());
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{
            "debug": false,
            "log_level": "debug",
            "time_input_formats": ["%I:%M %p"]
        }"#;

        let settings = from_json_str(json).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.time_input_formats, vec!["%I:%M %p"]);
        assert_eq!(settings.media_url, "/media/");
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{invalid json").is_err());
    }

    // ── File loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let dir = std::env::temp_dir().join("shopfront_test_toml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "use_l10n = false\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert!(!settings.use_l10n);

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_json_file() {
        let dir = std::env::temp_dir().join("shopfront_test_json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{"media_url": "/uploads/"}"#).unwrap();

        let settings = from_json_file(&path).unwrap();
        assert_eq!(settings.media_url, "/uploads/");

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_file_missing() {
        assert!(from_toml_file("/nonexistent/path/settings.toml").is_err());
        assert!(from_json_file("/nonexistent/path/settings.json").is_err());
    }

    // ── Environment variable overrides ──────────────────────────────

    #[test]
    fn test_apply_env_overrides_debug() {
        let mut settings = Settings::default();
        std::env::set_var("SHOPFRONT_DEBUG", "no");
        apply_env_overrides(&mut settings);
        assert!(!settings.debug);
        std::env::remove_var("SHOPFRONT_DEBUG");
    }

    #[test]
    fn test_apply_env_overrides_date_formats() {
        let mut settings = Settings::default();
        std::env::set_var("SHOPFRONT_DATE_INPUT_FORMATS", "%d/%m/%Y; %b %d, %Y ;");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.date_input_formats, vec!["%d/%m/%Y", "%b %d, %Y"]);
        std::env::remove_var("SHOPFRONT_DATE_INPUT_FORMATS");
    }

    #[test]
    fn test_apply_env_overrides_blank_formats_ignored() {
        let mut settings = Settings::default();
        std::env::set_var("SHOPFRONT_TIME_INPUT_FORMATS", " ; ");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.time_input_formats[0], "%H:%M:%S");
        std::env::remove_var("SHOPFRONT_TIME_INPUT_FORMATS");
    }

    #[test]
    fn test_apply_env_overrides_media_url() {
        let mut settings = Settings::default();
        std::env::set_var("SHOPFRONT_MEDIA_URL", "https://cdn.example.com/media/");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.media_url, "https://cdn.example.com/media/");
        std::env::remove_var("SHOPFRONT_MEDIA_URL");
    }

    // ── merge_json helper ───────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"outer": {"a": 1, "b": 2}});
        let over = serde_json::json!({"outer": {"b": 3}});
        let merged = merge_json(base, over);
        assert_eq!(merged["outer"]["a"], 1);
        assert_eq!(merged["outer"]["b"], 3);
    }

    #[test]
    fn test_merge_json_array_override() {
        let base = serde_json::json!({"list": [1, 2, 3]});
        let over = serde_json::json!({"list": [4, 5]});
        assert_eq!(merge_json(base, over)["list"], serde_json::json!([4, 5]));
    }
}
