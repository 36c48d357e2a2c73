//! Template rendering for widgets.
//!
//! Widget markup comes from [tera] templates. The built-in templates are
//! compiled into the crate; a project can replace any of them by loading its
//! own directory with [`Renderer::with_template_glob`] or registering a
//! source with [`Renderer::add_raw_template`].

use std::error::Error as _;
use std::fmt;
use std::sync::OnceLock;

use shopfront_core::{ShopfrontError, ShopfrontResult};
use tera::Tera;

use crate::widgets::WidgetContext;

/// Template for `<input>` based widgets.
pub const INPUT_TEMPLATE: &str = "widgets/input.html";
/// Template for `<textarea>` based widgets.
pub const TEXTAREA_TEMPLATE: &str = "widgets/textarea.html";
/// Template for `<select>` based widgets.
pub const SELECT_TEMPLATE: &str = "widgets/select.html";
/// Template for the image input with preview.
pub const IMAGE_INPUT_TEMPLATE: &str = "widgets/image_input.html";
/// Template for the date/time picker input group.
pub const DATE_TIME_PICKER_TEMPLATE: &str = "widgets/date_time_picker.html";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (INPUT_TEMPLATE, include_str!("../templates/widgets/input.html")),
    (TEXTAREA_TEMPLATE, include_str!("../templates/widgets/textarea.html")),
    (SELECT_TEMPLATE, include_str!("../templates/widgets/select.html")),
    (
        IMAGE_INPUT_TEMPLATE,
        include_str!("../templates/widgets/image_input.html"),
    ),
    (
        DATE_TIME_PICKER_TEMPLATE,
        include_str!("../templates/widgets/date_time_picker.html"),
    ),
];

/// Renders widget contexts through tera templates.
pub struct Renderer {
    tera: Tera,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        f.debug_struct("Renderer").field("templates", &names).finish()
    }
}

impl Renderer {
    /// Creates a renderer with only the built-in templates.
    pub fn new() -> ShopfrontResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.to_vec())
            .map_err(template_error)?;
        Ok(Self { tera })
    }

    /// Creates a renderer from the templates matching `glob` (e.g.
    /// `"templates/**/*.html"`). Templates found there take precedence over
    /// the built-in ones of the same name.
    pub fn with_template_glob(glob: &str) -> ShopfrontResult<Self> {
        let mut tera = Tera::new(glob).map_err(template_error)?;
        let builtin = Self::new()?;
        tera.extend(&builtin.tera).map_err(template_error)?;
        tracing::debug!(glob, "loaded project widget templates");
        Ok(Self { tera })
    }

    /// Registers (or replaces) a template from source.
    pub fn add_raw_template(&mut self, name: &str, source: &str) -> ShopfrontResult<()> {
        self.tera
            .add_raw_template(name, source)
            .map_err(template_error)
    }

    /// Returns `true` if a template with this name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Renders `template_name` with the given widget context.
    pub fn render(&self, template_name: &str, context: &WidgetContext) -> ShopfrontResult<String> {
        if !self.has_template(template_name) {
            return Err(ShopfrontError::TemplateDoesNotExist(
                template_name.to_string(),
            ));
        }
        let ctx = tera::Context::from_serialize(context).map_err(template_error)?;
        tracing::trace!(template = template_name, "rendering widget template");
        self.tera.render(template_name, &ctx).map_err(template_error)
    }
}

/// Returns the process-wide renderer holding the built-in templates.
pub fn default_renderer() -> &'static Renderer {
    static RENDERER: OnceLock<Renderer> = OnceLock::new();
    RENDERER.get_or_init(|| Renderer::new().expect("built-in widget templates are valid"))
}

/// Maps a tera error, including its causes, into a [`ShopfrontError`].
fn template_error(err: tera::Error) -> ShopfrontError {
    if let tera::ErrorKind::TemplateNotFound(name) = &err.kind {
        return ShopfrontError::TemplateDoesNotExist(name.clone());
    }

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    match &err.kind {
        tera::ErrorKind::Msg(_) if message.contains("Failed to parse") => {
            ShopfrontError::TemplateSyntaxError(message)
        }
        _ => ShopfrontError::TemplateError(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attrs;
    use crate::widgets::WidgetData;

    fn context(value: Option<&str>) -> WidgetContext {
        WidgetContext::new(WidgetData::new(
            "q",
            Some("text"),
            value.map(str::to_string),
            Attrs::new().with("id", "id_q"),
            INPUT_TEMPLATE,
        ))
    }

    #[test]
    fn test_builtin_templates_registered() {
        let renderer = Renderer::new().unwrap();
        for (name, _) in BUILTIN_TEMPLATES {
            assert!(renderer.has_template(name), "{name} missing");
        }
    }

    #[test]
    fn test_render_input() {
        let html = default_renderer()
            .render(INPUT_TEMPLATE, &context(Some("shoes")))
            .unwrap();
        assert_eq!(
            html.trim(),
            r#"<input type="text" name="q" value="shoes" id="id_q">"#
        );
    }

    #[test]
    fn test_render_escapes_value() {
        let html = default_renderer()
            .render(INPUT_TEMPLATE, &context(Some("<b>")))
            .unwrap();
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_render_without_value() {
        let html = default_renderer()
            .render(INPUT_TEMPLATE, &context(None))
            .unwrap();
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_missing_template() {
        let err = default_renderer()
            .render("widgets/nope.html", &context(None))
            .unwrap_err();
        assert!(matches!(err, ShopfrontError::TemplateDoesNotExist(_)));
    }

    #[test]
    fn test_override_template() {
        let mut renderer = Renderer::new().unwrap();
        renderer
            .add_raw_template(INPUT_TEMPLATE, "<custom {{ widget.name }}>")
            .unwrap();
        let html = renderer.render(INPUT_TEMPLATE, &context(None)).unwrap();
        assert_eq!(html, "<custom q>");
    }

    #[test]
    fn test_invalid_template_source() {
        let mut renderer = Renderer::new().unwrap();
        let err = renderer
            .add_raw_template("widgets/broken.html", "{% if %}")
            .unwrap_err();
        assert!(matches!(
            err,
            ShopfrontError::TemplateSyntaxError(_) | ShopfrontError::TemplateError(_)
        ));
    }

    #[test]
    fn test_debug_lists_templates() {
        let debug = format!("{:?}", Renderer::new().unwrap());
        assert!(debug.contains("widgets/select.html"));
    }
}
