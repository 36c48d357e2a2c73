//! Date and time input format lookup.
//!
//! Widgets that hand a format to a client-side picker need the format the
//! server will accept. [`get_format`] answers that for a [`FormatKey`]:
//!
//! 1. If localisation is enabled, formats registered for the language active
//!    on the current thread (see [`activate`]) win. `de-at` falls back to `de`.
//! 2. Otherwise the configured [`SETTINGS`](crate::settings::SETTINGS) lists
//!    are used, or the built-in defaults when settings are not configured.
//!
//! ```
//! use shopfront_core::formats::{self, FormatKey};
//!
//! formats::register_locale_formats("nl-doc", FormatKey::DateInput, vec!["%d-%m-%Y"]);
//! formats::activate("nl-doc");
//! assert_eq!(formats::get_format(FormatKey::DateInput)[0], "%d-%m-%Y");
//! formats::deactivate();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::settings::{self, Settings, SETTINGS};

/// The input format lists a widget can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    /// `DATE_INPUT_FORMATS`.
    DateInput,
    /// `TIME_INPUT_FORMATS`.
    TimeInput,
    /// `DATETIME_INPUT_FORMATS`.
    DateTimeInput,
}

impl FormatKey {
    /// The conventional upper-case setting name for this key.
    pub const fn setting_name(self) -> &'static str {
        match self {
            Self::DateInput => "DATE_INPUT_FORMATS",
            Self::TimeInput => "TIME_INPUT_FORMATS",
            Self::DateTimeInput => "DATETIME_INPUT_FORMATS",
        }
    }

    fn from_settings(self, settings: &Settings) -> Vec<String> {
        match self {
            Self::DateInput => settings.date_input_formats.clone(),
            Self::TimeInput => settings.time_input_formats.clone(),
            Self::DateTimeInput => settings.datetime_input_formats.clone(),
        }
    }

    fn defaults(self) -> Vec<String> {
        let formats = match self {
            Self::DateInput => settings::DEFAULT_DATE_INPUT_FORMATS,
            Self::TimeInput => settings::DEFAULT_TIME_INPUT_FORMATS,
            Self::DateTimeInput => settings::DEFAULT_DATETIME_INPUT_FORMATS,
        };
        formats.iter().map(|f| (*f).to_string()).collect()
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.setting_name())
    }
}

// ── Thread-local language state ──────────────────────────────────────────

thread_local! {
    static CURRENT_LANGUAGE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Activates the given language code for the current thread.
pub fn activate(language_code: &str) {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = Some(language_code.to_lowercase());
    });
}

/// Deactivates the current thread's language, reverting to the configured one.
pub fn deactivate() {
    CURRENT_LANGUAGE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Returns the language active on the current thread.
///
/// Falls back to `language_code` from the configured settings, then `"en-us"`.
pub fn get_language() -> String {
    CURRENT_LANGUAGE
        .with(|cell| cell.borrow().clone())
        .or_else(|| SETTINGS.try_get().map(|s| s.language_code.to_lowercase()))
        .unwrap_or_else(|| "en-us".to_string())
}

// ── Locale registry ──────────────────────────────────────────────────────

type LocaleFormats = HashMap<(String, FormatKey), Vec<String>>;

fn global_locale_formats() -> &'static RwLock<LocaleFormats> {
    static FORMATS: OnceLock<RwLock<LocaleFormats>> = OnceLock::new();
    FORMATS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Registers the input formats for `key` in `language`, replacing earlier ones.
pub fn register_locale_formats(language: &str, key: FormatKey, formats: Vec<&str>) {
    let formats = formats.into_iter().map(str::to_string).collect();
    global_locale_formats()
        .write()
        .expect("locale format lock poisoned")
        .insert((language.to_lowercase(), key), formats);
}

/// Removes every format registered for `language`.
pub fn clear_locale_formats(language: &str) {
    let language = language.to_lowercase();
    global_locale_formats()
        .write()
        .expect("locale format lock poisoned")
        .retain(|(lang, _), _| *lang != language);
}

fn locale_formats(language: &str, key: FormatKey) -> Option<Vec<String>> {
    let registry = global_locale_formats()
        .read()
        .expect("locale format lock poisoned");
    let lookup = |lang: &str| registry.get(&(lang.to_string(), key)).cloned();
    lookup(language).or_else(|| {
        language
            .split_once('-')
            .and_then(|(generic, _)| lookup(generic))
    })
}

/// Returns the accepted input formats for `key`, most preferred first.
pub fn get_format(key: FormatKey) -> Vec<String> {
    let settings = SETTINGS.try_get();
    let use_l10n = settings.map_or(true, |s| s.use_l10n);

    if use_l10n {
        let language = get_language();
        if let Some(formats) = locale_formats(&language, key) {
            tracing::trace!(%key, %language, "using locale input formats");
            return formats;
        }
    }

    settings.map_or_else(|| key.defaults(), |s| key.from_settings(s))
}

/// Returns the preferred (first) input format for `key`, or `""` if none are
/// configured.
pub fn get_preferred_format(key: FormatKey) -> String {
    get_format(key).into_iter().next().unwrap_or_default()
}
