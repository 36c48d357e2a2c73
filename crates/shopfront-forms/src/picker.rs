//! Translation of server-side date/time formats into client-side picker formats.
//!
//! Server formats use strftime directives (`%Y-%m-%d %H:%M`). The date/time
//! picker script expects its own tokens (`yyyy-mm-dd hh:ii`) and the input mask
//! plugin a third alphabet (`y-m-d h:s`). The tables below are the contract
//! with those scripts and must stay exact. Text that is not a known directive
//! is passed through unchanged.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Directive → picker token, applied in order for date-time formats.
pub const DATETIME_TOKENS: &[(&str, &str)] = &[
    ("%Y", "yyyy"),
    ("%y", "yy"),
    ("%m", "mm"),
    ("%d", "dd"),
    ("%H", "hh"),
    ("%I", "HH"),
    ("%M", "ii"),
    ("%S", "ss"),
];

/// Directive → picker token, applied in order for time formats.
pub const TIME_TOKENS: &[(&str, &str)] = &[
    ("%H", "hh"),
    ("%I", "HH"),
    ("%M", "ii"),
    ("%S", "ss"),
];

/// Directive → input mask token. Applied in a single pass.
pub const INPUT_MASK_TOKENS: &[(&str, &str)] = &[
    ("%Y", "y"),
    ("%y", "99"),
    ("%m", "m"),
    ("%d", "d"),
    ("%H", "h"),
    ("%I", "h"),
    ("%M", "s"),
    ("%S", "s"),
];

fn replace_sequentially(format: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(format.to_string(), |converted, (search, replace)| {
            converted.replace(search, replace)
        })
}

/// Converts a date-time format for the date-time picker.
///
/// ```
/// use shopfront_forms::picker::datetime_format_to_js_datetime_format;
///
/// assert_eq!(
///     datetime_format_to_js_datetime_format("%Y-%m-%d %H:%M"),
///     "yyyy-mm-dd hh:ii"
/// );
/// ```
pub fn datetime_format_to_js_datetime_format(format: &str) -> String {
    replace_sequentially(format, DATETIME_TOKENS)
        .trim()
        .to_string()
}

/// Converts the date part (first word) of a format for the date picker.
///
/// A blank format yields an empty string.
pub fn datetime_format_to_js_date_format(format: &str) -> String {
    let date_part = format.split_whitespace().next().unwrap_or_default();
    datetime_format_to_js_datetime_format(date_part)
}

/// Converts the time part of a format for the time picker.
///
/// The time part is the second word of a date-time format; a format with a
/// single word is taken as a whole.
pub fn datetime_format_to_js_time_format(format: &str) -> String {
    let time_part = format.split_whitespace().nth(1).unwrap_or(format);
    replace_sequentially(time_part, TIME_TOKENS)
        .trim()
        .to_string()
}

/// Converts a format into the pattern used by the input mask plugin.
///
/// Unlike the picker conversions every directive is replaced in one pass,
/// so a replacement is never rescanned.
pub fn datetime_format_to_js_input_mask(format: &str) -> String {
    static DIRECTIVE_RE: OnceLock<Regex> = OnceLock::new();
    let directive_re = DIRECTIVE_RE.get_or_init(|| {
        let alternatives: Vec<String> = INPUT_MASK_TOKENS
            .iter()
            .map(|(search, _)| regex::escape(search))
            .collect();
        Regex::new(&format!("({})", alternatives.join("|"))).unwrap()
    });

    directive_re
        .replace_all(format, |caps: &Captures<'_>| {
            INPUT_MASK_TOKENS
                .iter()
                .find(|(search, _)| *search == &caps[0])
                .map_or_else(|| caps[0].to_string(), |(_, replace)| (*replace).to_string())
        })
        .trim()
        .to_string()
}
