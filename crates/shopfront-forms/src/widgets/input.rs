//! Stock input and textarea widgets.
//!
//! These are the building blocks the storefront widgets wrap.

use shopfront_core::formats::{get_preferred_format, FormatKey};

use super::{Widget, WidgetType};
use crate::attrs::Attrs;
use crate::data::{FileData, FormData};
use crate::renderer::{INPUT_TEMPLATE, TEXTAREA_TEMPLATE};
use crate::value::WidgetValue;

// ---------------------------------------------------------------------------
// Text inputs
// ---------------------------------------------------------------------------

/// A basic `<input type="text">` widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    attrs: Attrs,
    required: bool,
}

impl TextInput {
    /// Creates a text input with the given attributes.
    pub const fn new(attrs: Attrs) -> Self {
        Self {
            attrs,
            required: false,
        }
    }
}

impl Widget for TextInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::TextInput
    }

    fn template_name(&self) -> &str {
        INPUT_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn input_type(&self) -> Option<&str> {
        Some("text")
    }
}

/// An `<input type="hidden">` widget.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput {
    attrs: Attrs,
    required: bool,
}

impl HiddenInput {
    /// Creates a hidden input with the given attributes.
    pub const fn new(attrs: Attrs) -> Self {
        Self {
            attrs,
            required: false,
        }
    }
}

impl Widget for HiddenInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::HiddenInput
    }

    fn template_name(&self) -> &str {
        INPUT_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn input_type(&self) -> Option<&str> {
        Some("hidden")
    }
}

// ---------------------------------------------------------------------------
// File input
// ---------------------------------------------------------------------------

/// An `<input type="file">` widget.
///
/// Browsers cannot prefill a file input, so the value is never rendered.
#[derive(Debug, Clone, Default)]
pub struct FileInput {
    attrs: Attrs,
    required: bool,
}

impl FileInput {
    /// Creates a file input with the given attributes.
    pub const fn new(attrs: Attrs) -> Self {
        Self {
            attrs,
            required: false,
        }
    }
}

impl Widget for FileInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::FileInput
    }

    fn template_name(&self) -> &str {
        INPUT_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn input_type(&self) -> Option<&str> {
        Some("file")
    }

    fn format_value(&self, _value: &WidgetValue) -> Option<String> {
        None
    }

    fn value_from_data(&self, _data: &FormData, files: &FileData, name: &str) -> WidgetValue {
        files.get(name).cloned().into()
    }

    fn value_omitted_from_data(&self, _data: &FormData, files: &FileData, name: &str) -> bool {
        !files.contains_key(name)
    }
}

// ---------------------------------------------------------------------------
// Textarea
// ---------------------------------------------------------------------------

/// A `<textarea>` widget, `cols="40" rows="10"` unless overridden.
#[derive(Debug, Clone)]
pub struct Textarea {
    attrs: Attrs,
    required: bool,
}

impl Default for Textarea {
    fn default() -> Self {
        Self::new(Attrs::new())
    }
}

impl Textarea {
    /// Creates a textarea with the given attributes.
    pub fn new(mut attrs: Attrs) -> Self {
        attrs.set_default("cols", "40");
        attrs.set_default("rows", "10");
        Self {
            attrs,
            required: false,
        }
    }
}

impl Widget for Textarea {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Textarea
    }

    fn template_name(&self) -> &str {
        TEXTAREA_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }
}

// ---------------------------------------------------------------------------
// Date and time inputs
// ---------------------------------------------------------------------------

/// What a [`TemporalInput`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// A calendar date.
    Date,
    /// A time of day.
    Time,
    /// A date and a time.
    DateTime,
}

impl TemporalKind {
    /// The input formats consulted when no explicit format is given.
    pub const fn format_key(self) -> FormatKey {
        match self {
            Self::Date => FormatKey::DateInput,
            Self::Time => FormatKey::TimeInput,
            Self::DateTime => FormatKey::DateTimeInput,
        }
    }

    const fn widget_type(self) -> WidgetType {
        match self {
            Self::Date => WidgetType::DateInput,
            Self::Time => WidgetType::TimeInput,
            Self::DateTime => WidgetType::DateTimeInput,
        }
    }
}

/// A text input for dates, times or date-times.
///
/// Values are formatted with the explicit format if one was given, otherwise
/// with the preferred input format of the active language.
#[derive(Debug, Clone)]
pub struct TemporalInput {
    kind: TemporalKind,
    attrs: Attrs,
    format: Option<String>,
    required: bool,
}

impl TemporalInput {
    /// Creates an input of the given kind.
    pub fn new(kind: TemporalKind, attrs: Attrs, format: Option<&str>) -> Self {
        Self {
            kind,
            attrs,
            format: format.map(str::to_string),
            required: false,
        }
    }

    /// Creates a date input.
    pub fn date(attrs: Attrs, format: Option<&str>) -> Self {
        Self::new(TemporalKind::Date, attrs, format)
    }

    /// Creates a time input.
    pub fn time(attrs: Attrs, format: Option<&str>) -> Self {
        Self::new(TemporalKind::Time, attrs, format)
    }

    /// Creates a date-time input.
    pub fn datetime(attrs: Attrs, format: Option<&str>) -> Self {
        Self::new(TemporalKind::DateTime, attrs, format)
    }

    /// The kind of value this input edits.
    pub const fn kind(&self) -> TemporalKind {
        self.kind
    }

    /// The format given at construction, if any.
    pub fn explicit_format(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.is_empty())
    }

    /// The format values are rendered with.
    pub fn format(&self) -> String {
        self.explicit_format().map_or_else(
            || get_preferred_format(self.kind.format_key()),
            str::to_string,
        )
    }
}

impl Widget for TemporalInput {
    fn widget_type(&self) -> WidgetType {
        self.kind.widget_type()
    }

    fn template_name(&self) -> &str {
        INPUT_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn input_type(&self) -> Option<&str> {
        Some("text")
    }

    fn format_value(&self, value: &WidgetValue) -> Option<String> {
        if !value.is_truthy() {
            return None;
        }
        value
            .format_temporal(&self.format())
            .or_else(|| Some(value.to_text()))
    }
}
