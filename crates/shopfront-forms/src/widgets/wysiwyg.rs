//! Textarea tagged for the rich-text editor.

use super::{Textarea, Widget, WidgetType};
use crate::attrs::Attrs;

/// A textarea picked up by the rich-text editor through its `wysiwyg` class.
#[derive(Debug, Clone)]
pub struct WysiwygTextarea {
    textarea: Textarea,
}

impl Default for WysiwygTextarea {
    fn default() -> Self {
        Self::new(Attrs::new())
    }
}

impl WysiwygTextarea {
    /// Creates the textarea, appending ` wysiwyg` to any given class.
    pub fn new(mut attrs: Attrs) -> Self {
        let class = format!("{} wysiwyg", attrs.get_text("class").unwrap_or_default());
        attrs.insert("class", class);
        Self {
            textarea: Textarea::new(attrs),
        }
    }
}

impl Widget for WysiwygTextarea {
    fn widget_type(&self) -> WidgetType {
        WidgetType::WysiwygTextarea
    }

    fn template_name(&self) -> &str {
        self.textarea.template_name()
    }

    fn attrs(&self) -> &Attrs {
        self.textarea.attrs()
    }

    fn is_required(&self) -> bool {
        self.textarea.is_required()
    }

    fn set_required(&mut self, required: bool) {
        self.textarea.set_required(required);
    }
}
