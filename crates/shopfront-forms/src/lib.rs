//! # shopfront-forms
//!
//! Form widgets for storefront pages. Widgets turn a field value into HTML
//! through [tera] templates and read the value back from submitted data.
//!
//! ## Modules
//!
//! - [`widgets`] - The [`Widget`] trait, stock widgets and the storefront widgets
//! - [`picker`] - Translation of strftime formats into picker formats and input masks
//! - [`renderer`] - Template rendering with overridable built-in templates
//! - [`attrs`] - HTML attribute maps
//! - [`data`] - Submitted form data and uploads
//! - [`value`] - Field values as seen by widgets
//!
//! ## Example
//!
//! ```
//! use shopfront_forms::{Attrs, Widget, WysiwygTextarea, default_renderer};
//!
//! let widget = WysiwygTextarea::new(Attrs::new().with("class", "form-control"));
//! let html = widget
//!     .render("description", &"Soft".into(), &Attrs::new(), default_renderer())
//!     .unwrap();
//! assert!(html.contains(r#"class="form-control wysiwyg""#));
//! ```

pub mod attrs;
pub mod data;
pub mod picker;
pub mod renderer;
pub mod value;
pub mod widgets;

pub use attrs::{AttrValue, Attrs};
pub use data::{FileData, FormData, UploadedFile};
pub use renderer::{default_renderer, Renderer};
pub use value::WidgetValue;
pub use widgets::{
    AdvancedSelect, ChoiceOption, ChoiceWidget, DatePickerInput, DateTimePickerInput, FileInput,
    HiddenInput, ImageInput, RemoteSelect, RemoteSelectBuilder, Select, TemporalInput,
    TemporalKind, TextInput, Textarea, TimePickerInput, Widget, WidgetContext, WidgetData,
    WidgetType, WysiwygTextarea,
};
