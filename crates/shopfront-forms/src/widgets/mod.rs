//! Widget system for rendering HTML form elements.
//!
//! Widgets are the bridge between form fields and their HTML representation.
//! Each widget builds its attributes, turns a field value into template
//! context, renders that context, and extracts a value from submitted data.
//!
//! The stock widgets live in [`input`] and [`select`]. The storefront widgets
//! wrap a stock widget and override the hooks they need:
//!
//! - [`ImageInput`]: file input with a preview of the stored image
//! - [`WysiwygTextarea`]: textarea tagged for the rich-text editor
//! - [`DatePickerInput`], [`TimePickerInput`], [`DateTimePickerInput`]:
//!   text inputs carrying picker format and input mask hints
//! - [`AdvancedSelect`]: select with disabled options
//! - [`RemoteSelect`]: hidden input backing an AJAX lookup select

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use shopfront_core::logging::render_span;
use shopfront_core::ShopfrontResult;

use crate::attrs::{AttrValue, Attrs};
use crate::data::{FileData, FormData};
use crate::renderer::Renderer;
use crate::value::WidgetValue;

pub mod datetime;
pub mod image;
pub mod input;
pub mod remote;
pub mod select;
pub mod wysiwyg;

pub use datetime::{DatePickerInput, DateTimePickerInput, TimePickerInput};
pub use image::ImageInput;
pub use input::{FileInput, HiddenInput, TemporalInput, TemporalKind, TextInput, Textarea};
pub use remote::{RemoteSelect, RemoteSelectBuilder};
pub use select::{AdvancedSelect, Select};
pub use wysiwyg::WysiwygTextarea;

/// Enumerates the widget types in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetType {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="hidden">`.
    HiddenInput,
    /// `<textarea>`.
    Textarea,
    /// `<select>`.
    Select,
    /// `<input type="file">`.
    FileInput,
    /// Text input for a date.
    DateInput,
    /// Text input for a time.
    TimeInput,
    /// Text input for a date and time.
    DateTimeInput,
    /// File input with an image preview.
    ImageInput,
    /// Textarea for the rich-text editor.
    WysiwygTextarea,
    /// Date input with picker hints.
    DatePickerInput,
    /// Time input with picker hints.
    TimePickerInput,
    /// Date-time input with picker hints.
    DateTimePickerInput,
    /// Select with disabled options.
    AdvancedSelect,
    /// Single-value AJAX lookup.
    RemoteSelect,
    /// Multi-value AJAX lookup.
    MultipleRemoteSelect,
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::HiddenInput => "HiddenInput",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::FileInput => "FileInput",
            Self::DateInput => "DateInput",
            Self::TimeInput => "TimeInput",
            Self::DateTimeInput => "DateTimeInput",
            Self::ImageInput => "ImageInput",
            Self::WysiwygTextarea => "WysiwygTextarea",
            Self::DatePickerInput => "DatePickerInput",
            Self::TimePickerInput => "TimePickerInput",
            Self::DateTimePickerInput => "DateTimePickerInput",
            Self::AdvancedSelect => "AdvancedSelect",
            Self::RemoteSelect => "RemoteSelect",
            Self::MultipleRemoteSelect => "MultipleRemoteSelect",
        };
        write!(f, "{name}")
    }
}

/// The `widget` entry of a template context.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetData {
    /// The HTML `name`.
    pub name: String,
    /// The `<input>` type, for input based widgets.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Whether the widget renders as a hidden input.
    pub is_hidden: bool,
    /// Whether the field is required.
    pub required: bool,
    /// The formatted value, if any.
    pub value: Option<String>,
    /// The final attributes.
    pub attrs: Attrs,
    /// `attrs` rendered for a tag; kept in sync by [`WidgetData::set_attr`].
    pub flat_attrs: String,
    /// The template the widget renders with.
    pub template_name: String,
    /// The options of a choice widget.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
}

impl WidgetData {
    /// Creates widget data with the given final attributes.
    pub fn new(
        name: &str,
        input_type: Option<&str>,
        value: Option<String>,
        attrs: Attrs,
        template_name: &str,
    ) -> Self {
        let flat_attrs = attrs.flatten();
        Self {
            name: name.to_string(),
            input_type: input_type.map(str::to_string),
            is_hidden: input_type == Some("hidden"),
            required: false,
            value,
            attrs,
            flat_attrs,
            template_name: template_name.to_string(),
            options: Vec::new(),
        }
    }

    /// Sets an attribute after construction.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name, value);
        self.flat_attrs = self.attrs.flatten();
    }
}

/// The context a widget template is rendered with.
///
/// Holds the `widget` entry plus any widget-specific top-level keys such as
/// `image_url` or `div_attrs`.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetContext {
    /// The `widget` entry.
    pub widget: WidgetData,
    /// Additional top-level keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WidgetContext {
    /// Creates a context with no extra keys.
    pub const fn new(widget: WidgetData) -> Self {
        Self {
            widget,
            extra: BTreeMap::new(),
        }
    }

    /// Sets a top-level key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Returns a top-level key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Returns a top-level key holding a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }
}

/// A trait for HTML form widgets.
///
/// Only the accessors are required; every lifecycle hook has a default that
/// mirrors a plain input. Widgets are `Send + Sync` so a form definition can
/// be shared across request handlers.
pub trait Widget: Send + Sync + fmt::Debug {
    /// Returns the widget type enum variant.
    fn widget_type(&self) -> WidgetType;

    /// Returns the name of the template used by [`render`](Widget::render).
    fn template_name(&self) -> &str;

    /// Returns the attributes given at construction.
    fn attrs(&self) -> &Attrs;

    /// Returns whether the field using this widget is required.
    fn is_required(&self) -> bool;

    /// Marks the field using this widget as required or optional.
    fn set_required(&mut self, required: bool);

    /// Returns the `<input>` type, for input based widgets.
    fn input_type(&self) -> Option<&str> {
        None
    }

    /// Returns `true` if the widget renders as a hidden input.
    fn is_hidden(&self) -> bool {
        self.input_type() == Some("hidden")
    }

    /// Converts a value into the string placed in the markup, or `None` when
    /// nothing should be rendered.
    fn format_value(&self, value: &WidgetValue) -> Option<String> {
        value.is_truthy().then(|| value.to_text())
    }

    /// Combines the construction attributes with the per-render ones.
    fn build_attrs(&self, base: &Attrs, extra: &Attrs) -> Attrs {
        base.merged(extra)
    }

    /// Builds the template context.
    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        default_context(self, name, value, attrs)
    }

    /// Renders the widget as HTML.
    fn render(
        &self,
        name: &str,
        value: &WidgetValue,
        attrs: &Attrs,
        renderer: &Renderer,
    ) -> ShopfrontResult<String> {
        let span = render_span(&self.widget_type().to_string(), name);
        let _guard = span.enter();
        let context = self.get_context(name, value, attrs);
        renderer.render(self.template_name(), &context)
    }

    /// Extracts the value for `name` from submitted data.
    fn value_from_data(&self, data: &FormData, _files: &FileData, name: &str) -> WidgetValue {
        data.get(name).map_or(WidgetValue::None, WidgetValue::from)
    }

    /// Returns `true` if the submission left this widget out entirely.
    fn value_omitted_from_data(&self, data: &FormData, _files: &FileData, name: &str) -> bool {
        !data.contains_key(name)
    }

    /// Returns the HTML `id` a `<label>` for this widget should target.
    fn id_for_label(&self, id: &str) -> String {
        id.to_string()
    }
}

/// The context every widget starts from: final attributes from
/// [`Widget::build_attrs`] and the value from [`Widget::format_value`].
///
/// Widgets that override [`Widget::get_context`] call this and then add
/// their own keys.
pub fn default_context<W: Widget + ?Sized>(
    widget: &W,
    name: &str,
    value: &WidgetValue,
    attrs: &Attrs,
) -> WidgetContext {
    let attrs = widget.build_attrs(widget.attrs(), attrs);
    let mut data = WidgetData::new(
        name,
        widget.input_type(),
        widget.format_value(value),
        attrs,
        widget.template_name(),
    );
    data.is_hidden = widget.is_hidden();
    data.required = widget.is_required();
    WidgetContext::new(data)
}

/// One `<option>` of a choice widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// The `name` of the owning widget.
    pub name: String,
    /// The submitted value.
    pub value: String,
    /// The displayed label.
    pub label: String,
    /// Whether the option is selected.
    pub selected: bool,
    /// Position among the widget's choices.
    pub index: usize,
    /// Option attributes.
    pub attrs: Attrs,
    /// `attrs` rendered for a tag; kept in sync by [`ChoiceOption::set_attr`].
    pub flat_attrs: String,
}

impl ChoiceOption {
    /// Creates an option, marking it `selected` when it is.
    pub fn new(name: &str, value: &str, label: &str, selected: bool, index: usize) -> Self {
        let mut attrs = Attrs::new();
        if selected {
            attrs.insert("selected", true);
        }
        let flat_attrs = attrs.flatten();
        Self {
            name: name.to_string(),
            value: value.to_string(),
            label: label.to_string(),
            selected,
            index,
            attrs,
            flat_attrs,
        }
    }

    /// Sets an option attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name, value);
        self.flat_attrs = self.attrs.flatten();
    }

    /// Returns `true` if the option carries the `disabled` flag.
    pub fn is_disabled(&self) -> bool {
        self.attrs.get("disabled") == Some(&AttrValue::Bool(true))
    }
}

/// Widgets that render a list of choices.
pub trait ChoiceWidget: Widget {
    /// The `(value, label)` pairs to render.
    fn choices(&self) -> &[(String, String)];

    /// Whether more than one option may be selected.
    fn allow_multiple_selected(&self) -> bool {
        false
    }

    /// Creates the option for one choice.
    fn create_option(
        &self,
        name: &str,
        value: &str,
        label: &str,
        selected: bool,
        index: usize,
    ) -> ChoiceOption {
        ChoiceOption::new(name, value, label, selected, index)
    }
}

/// Creates the options of a choice widget for the given selected values.
///
/// Unless the widget allows several selections only the first matching
/// choice is selected.
pub fn build_options<W: ChoiceWidget + ?Sized>(
    widget: &W,
    name: &str,
    selected_values: &[String],
) -> Vec<ChoiceOption> {
    let mut has_selected = false;
    widget
        .choices()
        .iter()
        .enumerate()
        .map(|(index, (value, label))| {
            let selected = selected_values.contains(value)
                && (!has_selected || widget.allow_multiple_selected());
            has_selected |= selected;
            widget.create_option(name, value, label, selected, index)
        })
        .collect()
}

/// The context of a choice widget: [`default_context`] plus its options.
pub fn choice_context<W: ChoiceWidget + ?Sized>(
    widget: &W,
    name: &str,
    value: &WidgetValue,
    attrs: &Attrs,
) -> WidgetContext {
    let mut context = default_context(widget, name, value, attrs);
    context.widget.options = build_options(widget, name, &value.to_list());
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_type_display() {
        assert_eq!(WidgetType::TextInput.to_string(), "TextInput");
        assert_eq!(WidgetType::DatePickerInput.to_string(), "DatePickerInput");
        assert_eq!(
            WidgetType::MultipleRemoteSelect.to_string(),
            "MultipleRemoteSelect"
        );
    }

    #[test]
    fn test_widget_data_set_attr_refreshes_flat() {
        let mut data = WidgetData::new("x", Some("text"), None, Attrs::new(), "t.html");
        assert_eq!(data.flat_attrs, "");
        data.set_attr("id", "id_x");
        assert_eq!(data.flat_attrs, r#" id="id_x""#);
    }

    #[test]
    fn test_widget_data_hidden() {
        let data = WidgetData::new("x", Some("hidden"), None, Attrs::new(), "t.html");
        assert!(data.is_hidden);
    }

    #[test]
    fn test_context_serializes_extra_at_top_level() {
        let mut ctx = WidgetContext::new(WidgetData::new(
            "x",
            None,
            Some("v".into()),
            Attrs::new(),
            "t.html",
        ));
        ctx.insert("image_id", "id_x-image");
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["image_id"], "id_x-image");
        assert_eq!(json["widget"]["value"], "v");
        assert!(json["widget"].get("type").is_none());
        assert!(json["widget"].get("options").is_none());
        assert_eq!(ctx.get_str("image_id"), Some("id_x-image"));
    }

    #[test]
    fn test_choice_option_selected_attr() {
        let option = ChoiceOption::new("size", "m", "Medium", true, 1);
        assert_eq!(option.flat_attrs, " selected");
        assert!(!option.is_disabled());
    }

    #[test]
    fn test_choice_option_set_attr() {
        let mut option = ChoiceOption::new("size", "xl", "XL", false, 3);
        option.set_attr("disabled", true);
        assert!(option.is_disabled());
        assert_eq!(option.flat_attrs, " disabled");
    }
}
