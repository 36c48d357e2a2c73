//! Hidden inputs backing AJAX lookup selects.
//!
//! The options of a remote select are fetched by the browser from a lookup
//! endpoint, so the server only renders a hidden `<input>` carrying the
//! endpoint URL and the current value. Multiple selections travel as a
//! single comma-delimited value.
//!
//! ```
//! use shopfront_forms::{Attrs, RemoteSelect, Widget, WidgetValue, default_renderer};
//!
//! let widget = RemoteSelect::builder()
//!     .lookup_url("/dashboard/products/lookup/")
//!     .multiple(true)
//!     .build()
//!     .unwrap();
//! let value = WidgetValue::List(vec!["3".into(), String::new(), "8".into()]);
//! let html = widget
//!     .render("products", &value, &Attrs::new(), default_renderer())
//!     .unwrap();
//! assert_eq!(
//!     html,
//!     r#"<input data-ajax-url="&#x2F;dashboard&#x2F;products&#x2F;lookup&#x2F;" data-multiple="multiple" data-required="" name="products" type="hidden" value="3,8">"#
//! );
//! ```

use shopfront_core::logging::render_span;
use shopfront_core::{ShopfrontError, ShopfrontResult};

use super::{Widget, WidgetType};
use crate::attrs::Attrs;
use crate::data::{FileData, FormData};
use crate::renderer::{Renderer, INPUT_TEMPLATE};
use crate::value::WidgetValue;

/// A hidden input for a select whose options come from `lookup_url`.
///
/// Construct it with [`RemoteSelect::builder`]; a lookup URL is required.
#[derive(Debug, Clone)]
pub struct RemoteSelect {
    attrs: Attrs,
    lookup_url: String,
    is_multiple: bool,
    required: bool,
}

/// Builder for [`RemoteSelect`].
#[derive(Debug, Clone, Default)]
pub struct RemoteSelectBuilder {
    attrs: Attrs,
    lookup_url: Option<String>,
    is_multiple: bool,
}

impl RemoteSelectBuilder {
    /// Sets the URL the browser fetches options from.
    #[must_use]
    pub fn lookup_url(mut self, url: &str) -> Self {
        self.lookup_url = Some(url.to_string());
        self
    }

    /// Allows several values to be selected.
    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.is_multiple = multiple;
        self
    }

    /// Sets the widget attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Builds the widget.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::ImproperlyConfigured`] if no lookup URL was set.
    pub fn build(self) -> ShopfrontResult<RemoteSelect> {
        let Some(lookup_url) = self.lookup_url else {
            tracing::warn!("remote select built without a lookup URL");
            return Err(ShopfrontError::ImproperlyConfigured(
                "RemoteSelect requires a lookup URL".to_string(),
            ));
        };
        tracing::debug!(lookup_url = %lookup_url, multiple = self.is_multiple, "created remote select");
        Ok(RemoteSelect {
            attrs: self.attrs,
            lookup_url,
            is_multiple: self.is_multiple,
            required: false,
        })
    }
}

impl RemoteSelect {
    /// Returns a builder.
    pub fn builder() -> RemoteSelectBuilder {
        RemoteSelectBuilder::default()
    }

    /// Creates a single-value remote select.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::ImproperlyConfigured`] if `lookup_url` is `None`.
    pub fn new(lookup_url: Option<&str>, attrs: Attrs) -> ShopfrontResult<Self> {
        Self::with_mode(lookup_url, attrs, false)
    }

    /// Creates a multi-value remote select.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::ImproperlyConfigured`] if `lookup_url` is `None`.
    pub fn new_multiple(lookup_url: Option<&str>, attrs: Attrs) -> ShopfrontResult<Self> {
        Self::with_mode(lookup_url, attrs, true)
    }

    fn with_mode(lookup_url: Option<&str>, attrs: Attrs, multiple: bool) -> ShopfrontResult<Self> {
        let mut builder = Self::builder().attrs(attrs).multiple(multiple);
        if let Some(url) = lookup_url {
            builder = builder.lookup_url(url);
        }
        builder.build()
    }

    /// The URL options are fetched from.
    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }

    /// Returns `true` if several values may be selected.
    pub const fn is_multiple(&self) -> bool {
        self.is_multiple
    }
}

/// Splits a delimited value, dropping empty entries.
fn split_values(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

impl Widget for RemoteSelect {
    fn widget_type(&self) -> WidgetType {
        if self.is_multiple {
            WidgetType::MultipleRemoteSelect
        } else {
            WidgetType::RemoteSelect
        }
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

    /// The value as the hidden input carries it; never `None`.
    fn format_value(&self, value: &WidgetValue) -> Option<String> {
        if !self.is_multiple {
            return Some(value.to_text());
        }
        let entries = match value {
            WidgetValue::List(items) => items.iter().filter(|v| !v.is_empty()).cloned().collect(),
            WidgetValue::Text(text) => split_values(text),
            WidgetValue::None => Vec::new(),
            other => vec![other.to_text()],
        };
        Some(entries.join(","))
    }

    fn render(
        &self,
        name: &str,
        value: &WidgetValue,
        attrs: &Attrs,
        _renderer: &Renderer,
    ) -> ShopfrontResult<String> {
        let span = render_span(&self.widget_type().to_string(), name);
        let _guard = span.enter();

        let mut attrs = self.build_attrs(&self.attrs, attrs);
        attrs.insert("type", "hidden");
        attrs.insert("name", name);
        attrs.insert("data-ajax-url", self.lookup_url.as_str());
        attrs.insert("data-multiple", if self.is_multiple { "multiple" } else { "" });
        attrs.insert("value", self.format_value(value).unwrap_or_default());
        attrs.insert("data-required", if self.required { "required" } else { "" });
        Ok(format!("<input{}>", attrs.flatten()))
    }

    fn value_from_data(&self, data: &FormData, _files: &FileData, name: &str) -> WidgetValue {
        match (data.get(name), self.is_multiple) {
            (None, false) => WidgetValue::None,
            (None, true) => WidgetValue::List(Vec::new()),
            (Some(value), false) => WidgetValue::from(value),
            (Some(value), true) => WidgetValue::List(split_values(value)),
        }
    }
}
