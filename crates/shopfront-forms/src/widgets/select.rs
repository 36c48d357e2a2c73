//! Select widgets.

use std::collections::HashSet;

use super::{choice_context, ChoiceOption, ChoiceWidget, Widget, WidgetContext, WidgetType};
use crate::attrs::Attrs;
use crate::renderer::SELECT_TEMPLATE;
use crate::value::WidgetValue;

/// A `<select>` widget.
#[derive(Debug, Clone, Default)]
pub struct Select {
    attrs: Attrs,
    choices: Vec<(String, String)>,
    required: bool,
}

impl Select {
    /// Creates a select from `(value, label)` pairs.
    pub fn new<V, L>(attrs: Attrs, choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self {
            attrs,
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            required: false,
        }
    }
}

impl Widget for Select {
    fn widget_type(&self) -> WidgetType {
        WidgetType::Select
    }

    fn template_name(&self) -> &str {
        SELECT_TEMPLATE
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

    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        choice_context(self, name, value, attrs)
    }
}

impl ChoiceWidget for Select {
    fn choices(&self) -> &[(String, String)] {
        &self.choices
    }
}

/// A select whose options listed in `disabled_values` cannot be chosen.
///
/// Values are compared as strings.
///
/// ```
/// use shopfront_forms::{AdvancedSelect, Attrs, Widget, default_renderer};
///
/// let widget = AdvancedSelect::new(
///     Attrs::new(),
///     [("1", "In stock"), ("2", "Discontinued")],
///     ["2"],
/// );
/// let html = widget
///     .render("product", &"1".into(), &Attrs::new(), default_renderer())
///     .unwrap();
/// assert!(html.contains(r#"<option value="2" disabled>Discontinued</option>"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdvancedSelect {
    select: Select,
    disabled_values: HashSet<String>,
}

impl AdvancedSelect {
    /// Creates a select with the given disabled values.
    pub fn new<V, L, D>(
        attrs: Attrs,
        choices: impl IntoIterator<Item = (V, L)>,
        disabled_values: impl IntoIterator<Item = D>,
    ) -> Self
    where
        V: Into<String>,
        L: Into<String>,
        D: ToString,
    {
        let disabled_values: HashSet<String> =
            disabled_values.into_iter().map(|v| v.to_string()).collect();
        tracing::debug!(disabled = disabled_values.len(), "created advanced select");
        Self {
            select: Select::new(attrs, choices),
            disabled_values,
        }
    }

    /// Returns `true` if the option with this value is disabled.
    pub fn is_disabled(&self, value: &str) -> bool {
        self.disabled_values.contains(value)
    }
}

impl Widget for AdvancedSelect {
    fn widget_type(&self) -> WidgetType {
        WidgetType::AdvancedSelect
    }

    fn template_name(&self) -> &str {
        self.select.template_name()
    }

    fn attrs(&self) -> &Attrs {
        self.select.attrs()
    }

    fn is_required(&self) -> bool {
        self.select.is_required()
    }

    fn set_required(&mut self, required: bool) {
        self.select.set_required(required);
    }

    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        choice_context(self, name, value, attrs)
    }
}

impl ChoiceWidget for AdvancedSelect {
    fn choices(&self) -> &[(String, String)] {
        self.select.choices()
    }

    fn create_option(
        &self,
        name: &str,
        value: &str,
        label: &str,
        selected: bool,
        index: usize,
    ) -> ChoiceOption {
        let mut option = self
            .select
            .create_option(name, value, label, selected, index);
        if self.is_disabled(value) {
            option.set_attr("disabled", true);
        }
        option
    }
}
