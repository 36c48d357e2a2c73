//! Field values as seen by widgets.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::data::UploadedFile;

/// A field value passed to or extracted by a widget.
///
/// `None`, empty text and empty lists are *falsy*: widgets treat them as
/// "no value".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WidgetValue {
    /// No value.
    #[default]
    None,
    /// A single textual value.
    Text(String),
    /// Several textual values.
    List(Vec<String>),
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day.
    Time(NaiveTime),
    /// A date and time.
    DateTime(NaiveDateTime),
    /// A file already stored by the application, referenced by its URL.
    File(String),
    /// A file that was just uploaded and is only held in memory.
    Upload(UploadedFile),
}

impl WidgetValue {
    /// Returns `true` unless the value is `None`, empty text or an empty list.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::None => false,
            Self::Text(s) | Self::File(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) | Self::Upload(_) => true,
        }
    }

    /// Returns `true` for an in-memory upload.
    pub const fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    /// Returns the textual value of `Text` and `File`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::File(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the value to text.
    ///
    /// Lists are joined with `,`, dates and times use ISO formats and uploads
    /// their file name.
    pub fn to_text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Text(s) | Self::File(s) => s.clone(),
            Self::List(items) => items.join(","),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Time(t) => t.format("%H:%M:%S").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Upload(file) => file.name.clone(),
        }
    }

    /// Formats a date or time value with a strftime-style `format`.
    ///
    /// Returns `None` for non-temporal values, and for formats chrono
    /// cannot render.
    pub fn format_temporal(&self, format: &str) -> Option<String> {
        let mut out = String::new();
        let written = match self {
            Self::Date(d) => write!(out, "{}", d.format(format)),
            Self::Time(t) => write!(out, "{}", t.format(format)),
            Self::DateTime(dt) => write!(out, "{}", dt.format(format)),
            _ => return None,
        };
        written.ok().map(|()| out)
    }

    /// Returns the values as a list: list entries, a single text value, or
    /// nothing.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            Self::None => Vec::new(),
            other => vec![other.to_text()],
        }
    }
}

impl From<&str> for WidgetValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for WidgetValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for WidgetValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<NaiveDate> for WidgetValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveTime> for WidgetValue {
    fn from(t: NaiveTime) -> Self {
        Self::Time(t)
    }
}

impl From<NaiveDateTime> for WidgetValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<UploadedFile> for WidgetValue {
    fn from(file: UploadedFile) -> Self {
        Self::Upload(file)
    }
}

impl<T: Into<Self>> From<Option<T>> for WidgetValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}
