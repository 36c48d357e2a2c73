//! File input with an inline preview of the current image.

use shopfront_core::settings::{media_file_url, DEFAULT_MEDIA_URL};
use shopfront_core::SETTINGS;

use super::{default_context, FileInput, Widget, WidgetContext, WidgetType};
use crate::attrs::Attrs;
use crate::data::{FileData, FormData};
use crate::renderer::IMAGE_INPUT_TEMPLATE;
use crate::value::WidgetValue;

/// A file input restricted to images that shows the stored image.
///
/// The template context gains `image_url`, the URL of the stored image or
/// `""`, and `image_id`, the id of the preview element. A stored file name
/// is resolved against the configured `media_url`. A freshly uploaded file
/// has no URL yet, so it is not previewed.
///
/// ```
/// use shopfront_forms::{Attrs, ImageInput, Widget, WidgetValue, default_renderer};
///
/// let widget = ImageInput::default();
/// let html = widget
///     .render(
///         "picture",
///         &WidgetValue::File("products/sofa.jpg".into()),
///         &Attrs::new().with("id", "id_picture"),
///         default_renderer(),
///     )
///     .unwrap();
/// assert!(html.contains(r#"id="id_picture-image""#));
/// assert!(html.contains(r#"accept="image&#x2F;*""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageInput {
    input: FileInput,
}

impl ImageInput {
    /// Creates an image input with the given attributes.
    pub const fn new(attrs: Attrs) -> Self {
        Self {
            input: FileInput::new(attrs),
        }
    }
}

/// The URL to preview for a value.
fn image_url(value: &WidgetValue) -> String {
    match value {
        WidgetValue::File(name) if !name.is_empty() => {
            let media_url = SETTINGS
                .try_get()
                .map_or(DEFAULT_MEDIA_URL, |s| s.media_url.as_str());
            media_file_url(media_url, name)
        }
        WidgetValue::Upload(_) => String::new(),
        other if other.is_truthy() => other.to_text(),
        _ => String::new(),
    }
}

impl Widget for ImageInput {
    fn widget_type(&self) -> WidgetType {
        WidgetType::ImageInput
    }

    fn template_name(&self) -> &str {
        IMAGE_INPUT_TEMPLATE
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
        let mut attrs = self.input.build_attrs(base, extra);
        attrs.insert("accept", "image/*");
        attrs
    }

    fn get_context(&self, name: &str, value: &WidgetValue, attrs: &Attrs) -> WidgetContext {
        let mut context = default_context(self, name, value, attrs);
        let existing = context.widget.attrs.get_text("id").map(str::to_string);
        let id = existing.unwrap_or_else(|| {
            let id = format!("id_{name}");
            context.widget.set_attr("id", id.clone());
            id
        });
        context.insert("image_url", image_url(value));
        context.insert("image_id", format!("{id}-image"));
        context
    }

    fn value_from_data(&self, data: &FormData, files: &FileData, name: &str) -> WidgetValue {
        self.input.value_from_data(data, files, name)
    }

    fn value_omitted_from_data(&self, data: &FormData, files: &FileData, name: &str) -> bool {
        self.input.value_omitted_from_data(data, files, name)
    }
}
