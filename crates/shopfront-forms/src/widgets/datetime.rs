//! Date, time and date-time inputs for the client-side picker.
//!
//! Each picker wraps a [`TemporalInput`] and passes its format to the
//! browser twice: as an input mask on the `<input>` (`data-inputmask`) and
//! as a picker format on the surrounding `<div>` (`div_attrs` in the
//! template context).
//!
//! ```
//! use shopfront_forms::{Attrs, DatePickerInput, Widget, WidgetValue, default_renderer};
//!
//! let widget = DatePickerInput::new(Attrs::new(), Some("%d/%m/%Y"));
//! let html = widget
//!     .render("start", &WidgetValue::None, &Attrs::new(), default_renderer())
//!     .unwrap();
//! assert!(html.contains(r#"data-dateFormat="dd&#x2F;mm&#x2F;yyyy""#));
//! assert!(html.contains("icon-calendar glyphicon-calendar"));
//! ```

use std::sync::OnceLock;

use regex::Regex;

use super::{default_context, TemporalInput, Widget, WidgetContext, WidgetType};
use crate::attrs::Attrs;
use crate::picker::{
    datetime_format_to_js_date_format, datetime_format_to_js_datetime_format,
    datetime_format_to_js_input_mask, datetime_format_to_js_time_format,
};
use crate::renderer::DATE_TIME_PICKER_TEMPLATE;
use crate::value::WidgetValue;

/// What distinguishes one picker from another in the markup.
struct PickerStyle {
    widget: &'static str,
    format_attr: &'static str,
    icon_classes: &'static str,
    picker_format: fn(&str) -> String,
}

const TIME_STYLE: PickerStyle = PickerStyle {
    widget: "time",
    format_attr: "data-timeFormat",
    icon_classes: "icon-time glyphicon-time",
    picker_format: datetime_format_to_js_time_format,
};

const DATE_STYLE: PickerStyle = PickerStyle {
    widget: "date",
    format_attr: "data-dateFormat",
    icon_classes: "icon-calendar glyphicon-calendar",
    picker_format: datetime_format_to_js_date_format,
};

const DATETIME_STYLE: PickerStyle = PickerStyle {
    widget: "datetime",
    format_attr: "data-datetimeFormat",
    icon_classes: "icon-calendar glyphicon-calendar",
    picker_format: datetime_format_to_js_datetime_format,
};

/// Adds the input mask for `format` to the input's attributes.
fn picker_attrs(input: &TemporalInput, base: &Attrs, extra: &Attrs) -> Attrs {
    let mut attrs = input.build_attrs(base, extra);
    let mask = datetime_format_to_js_input_mask(&input.format());
    attrs.insert("data-inputmask", format!("'mask': '{mask}'"));
    attrs
}

/// Adds the input-group attributes and icon to a picker's context.
fn picker_context<W: Widget + ?Sized>(
    widget: &W,
    input: &TemporalInput,
    style: &PickerStyle,
    name: &str,
    value: &WidgetValue,
    attrs: &Attrs,
) -> WidgetContext {
    let mut context = default_context(widget, name, value, attrs);
    let div_attrs = Attrs::new()
        .with("data-oscarWidget", style.widget)
        .with(style.format_attr, (style.picker_format)(&input.format()));
    context.insert("div_flat_attrs", div_attrs.flatten());
    context.insert("div_attrs", div_attrs.to_json());
    context.insert("icon_classes", style.icon_classes);
    context
}

// ---------------------------------------------------------------------------
// Pickers
// ---------------------------------------------------------------------------

/// A time input for the picker.
#[derive(Debug, Clone)]
pub struct TimePickerInput {
    input: TemporalInput,
}

impl Default for TimePickerInput {
    fn default() -> Self {
        Self::new(Attrs::new(), None)
    }
}

impl TimePickerInput {
    /// Creates a time picker. Without a format the active language's
    /// preferred time input format is used.
    pub fn new(attrs: Attrs, format: Option<&str>) -> Self {
        Self {
            input: TemporalInput::time(attrs, format),
        }
    }

    /// The format values are rendered with.
    pub fn format(&self) -> String {
        self.input.format()
    }
}

impl Widget for TimePickerInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::TimePickerInput
    }

    fn template_name(&self) -> &str {
        DATE_TIME_PICKER_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        self.input.attrs()
    }

    fn is_required(&self) -> bool {
        self.input.is_required()
    }

    fn set_required(&mut self, required: bool) {
        self.input.set_required(required);
    }

    fn input_type(&self) -> Option<&str> {
        self.input.input_type()
    }

    fn format_value(&self, value: &WidgetValue) -> Option<String> {
        self.input.format_value(value)
    }

    fn build_attrs(&self, base: &Attrs, extra: &Attrs) -> Attrs {
        picker_attrs(&self.input, base, extra)
    }

    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        picker_context(self, &self.input, &TIME_STYLE, name, value, attrs)
    }
}

/// A date input for the picker.
#[derive(Debug, Clone)]
pub struct DatePickerInput {
    input: TemporalInput,
}

impl Default for DatePickerInput {
    fn default() -> Self {
        Self::new(Attrs::new(), None)
    }
}

impl DatePickerInput {
    /// Creates a date picker. Without a format the active language's
    /// preferred date input format is used.
    pub fn new(attrs: Attrs, format: Option<&str>) -> Self {
        Self {
            input: TemporalInput::date(attrs, format),
        }
    }

    /// The format values are rendered with.
    pub fn format(&self) -> String {
        self.input.format()
    }
}

impl Widget for DatePickerInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::DatePickerInput
    }

    fn template_name(&self) -> &str {
        DATE_TIME_PICKER_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        self.input.attrs()
    }

    fn is_required(&self) -> bool {
        self.input.is_required()
    }

    fn set_required(&mut self, required: bool) {
        self.input.set_required(required);
    }

    fn input_type(&self) -> Option<&str> {
        self.input.input_type()
    }

    fn format_value(&self, value: &WidgetValue) -> Option<String> {
        self.input.format_value(value)
    }

    fn build_attrs(&self, base: &Attrs, extra: &Attrs) -> Attrs {
        picker_attrs(&self.input, base, extra)
    }

    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        picker_context(self, &self.input, &DATE_STYLE, name, value, attrs)
    }
}

/// A date-time input for the picker.
///
/// Seconds are dropped from an explicit format unless `include_seconds` is
/// set. Formats taken from the input format settings are used as they are;
/// localised formats without seconds belong in those settings.
#[derive(Debug, Clone)]
pub struct DateTimePickerInput {
    input: TemporalInput,
}

impl Default for DateTimePickerInput {
    fn default() -> Self {
        Self::new(Attrs::new(), None, false)
    }
}

fn seconds_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(":?%S").unwrap())
}

impl DateTimePickerInput {
    /// Creates a date-time picker.
    pub fn new(attrs: Attrs, format: Option<&str>, include_seconds: bool) -> Self {
        let format = match format {
            Some(f) if !include_seconds && !f.is_empty() => {
                let stripped = seconds_pattern().replace_all(f, "").into_owned();
                tracing::trace!(format = f, stripped = %stripped, "dropped seconds from picker format");
                Some(stripped)
            }
            other => other.map(str::to_string),
        };
        Self {
            input: TemporalInput::datetime(attrs, format.as_deref()),
        }
    }

    /// The format values are rendered with.
    pub fn format(&self) -> String {
        self.input.format()
    }
}

impl Widget for DateTimePickerInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::DateTimePickerInput
    }

    fn template_name(&self) -> &str {
        DATE_TIME_PICKER_TEMPLATE
    }

    fn attrs(&self) -> &Attrs {
        self.input.attrs()
    }

    fn is_required(&self) -> bool {
        self.input.is_required()
    }

    fn set_required(&mut self, required: bool) {
        self.input.set_required(required);
    }

    fn input_type(&self) -> Option<&str> {
        self.input.input_type()
    }

    fn format_value(&self, value: &WidgetValue) -> Option<String> {
        self.input.format_value(value)
    }

    fn build_attrs(&self, base: &Attrs, extra: &Attrs) -> Attrs {
        picker_attrs(&self.input, base, extra)
    }

    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        picker_context(self, &self.input, &DATETIME_STYLE, name, value, attrs)
    }
}
