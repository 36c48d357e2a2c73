//! Settings for shopfront.
//!
//! This module provides the [`Settings`] struct, which holds the
//! configuration the widget layer reads, and [`LazySettings`], a
//! globally-accessible, lazily-initialized settings instance.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Default formats accepted for date input, most preferred first.
pub const DEFAULT_DATE_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

/// Default formats accepted for time input, most preferred first.
pub const DEFAULT_TIME_INPUT_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S.%f", "%H:%M"];

/// Default formats accepted for date-time input, most preferred first.
pub const DEFAULT_DATETIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S.%f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S.%f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M:%S.%f",
    "%m/%d/%y %H:%M",
];

/// Default URL prefix for stored media files.
pub const DEFAULT_MEDIA_URL: &str = "/media/";

fn to_owned_list(formats: &[&str]) -> Vec<String> {
    formats.iter().map(|f| (*f).to_string()).collect()
}

/// The complete set of shopfront settings.
///
/// # Examples
///
/// ```
/// use shopfront_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.date_input_formats[0], "%Y-%m-%d");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,

    // ── Media ────────────────────────────────────────────────────────

    /// URL prefix for stored media files, used to build image preview URLs.
    pub media_url: String,

    // ── Internationalization ─────────────────────────────────────────

    /// The default language code (e.g. "en-us").
    pub language_code: String,
    /// Whether per-language input formats take precedence over the ones below.
    pub use_l10n: bool,

    // ── Input formats ────────────────────────────────────────────────

    /// Formats accepted for date fields; the first one drives the widgets.
    pub date_input_formats: Vec<String>,
    /// Formats accepted for time fields; the first one drives the widgets.
    pub time_input_formats: Vec<String>,
    /// Formats accepted for date-time fields; the first one drives the widgets.
    pub datetime_input_formats: Vec<String>,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            media_url: DEFAULT_MEDIA_URL.to_string(),
            language_code: "en-us".to_string(),
            use_l10n: true,
            date_input_formats: to_owned_list(DEFAULT_DATE_INPUT_FORMATS),
            time_input_formats: to_owned_list(DEFAULT_TIME_INPUT_FORMATS),
            datetime_input_formats: to_owned_list(DEFAULT_DATETIME_INPUT_FORMATS),
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

/// Returns the URL of a stored media file.
///
/// Names are joined onto `media_url`; absolute paths and full URLs are
/// returned as they are.
///
/// ```
/// use shopfront_core::settings::media_file_url;
///
/// assert_eq!(media_file_url("/media/", "products/sofa.jpg"), "/media/products/sofa.jpg");
/// assert_eq!(media_file_url("/media/", "/img/a.png"), "/img/a.png");
/// ```
pub fn media_file_url(media_url: &str, name: &str) -> String {
    if name.starts_with('/') || name.contains("://") {
        return name.to_string();
    }
    format!("{}/{name}", media_url.trim_end_matches('/'))
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup. Code that
/// only needs settings when they exist can use
/// [`try_get`](LazySettings::try_get) and fall back to defaults.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the settings. Must be called at most once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns the configured settings, or `None` before configuration.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
