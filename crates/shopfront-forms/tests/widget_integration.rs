//! Integration tests rendering every widget through the default renderer.
//!
//! Covers:
//! 1. Stock inputs, textarea and select markup
//! 2. Image input preview and WYSIWYG textarea
//! 3. Date/time pickers, including per-language input formats
//! 4. Advanced and remote selects
//! 5. Template overrides

use chrono::{NaiveDate, NaiveTime};

use shopfront_core::formats::{activate, clear_locale_formats, deactivate, register_locale_formats};
use shopfront_core::{FormatKey, ShopfrontError};
use shopfront_forms::{
    default_renderer, AdvancedSelect, Attrs, DatePickerInput, DateTimePickerInput, FileData,
    FormData, ImageInput, RemoteSelect, Renderer, Select, TextInput, Textarea, TimePickerInput,
    UploadedFile, Widget, WidgetValue, WysiwygTextarea,
};

// ============================================================================
// Shared helpers
// ============================================================================

fn render(widget: &dyn Widget, name: &str, value: &WidgetValue, attrs: &Attrs) -> String {
    widget
        .render(name, value, attrs, default_renderer())
        .unwrap()
}

fn id(value: &str) -> Attrs {
    Attrs::new().with("id", value)
}

// ============================================================================
// 1. Stock widgets
// ============================================================================

#[test]
fn test_text_input_markup() {
    let widget = TextInput::new(Attrs::new().with("class", "form-control"));
    let html = render(&widget, "q", &"red shoes".into(), &id("id_q"));
    assert_eq!(
        html.trim(),
        r#"<input type="text" name="q" value="red shoes" class="form-control" id="id_q">"#
    );
}

#[test]
fn test_textarea_markup() {
    let html = render(&Textarea::default(), "note", &"Gift wrap".into(), &Attrs::new());
    assert!(html.starts_with(r#"<textarea name="note" cols="40" rows="10">"#));
    assert!(html.contains("Gift wrap</textarea>"));
}

#[test]
fn test_select_markup() {
    let widget = Select::new(Attrs::new(), vec![("s", "Small"), ("m", "Medium")]);
    let html = render(&widget, "size", &"m".into(), &Attrs::new());
    assert!(html.contains(r#"<option value="s">Small</option>"#));
    assert!(html.contains(r#"<option value="m" selected>Medium</option>"#));
}

// ============================================================================
// 2. Image input and WYSIWYG textarea
// ============================================================================

#[test]
fn test_image_input_with_stored_image() {
    let html = render(
        &ImageInput::default(),
        "picture",
        &WidgetValue::File("/media/images/sofa.jpg".into()),
        &id("id_picture"),
    );
    assert!(html.contains(r#"<label for="id_picture""#));
    assert!(html.contains(r#"id="id_picture-image""#));
    assert!(html.contains("sofa.jpg"));
    assert!(!html.contains("img-thumbnail hidden"));
    assert!(html.contains(r#"type="file""#));
    assert!(html.contains(r#"accept="image&#x2F;*""#));
    // the file input itself never carries the value
    assert!(!html.contains("value="));
}

#[test]
fn test_image_input_without_image() {
    let html = render(&ImageInput::default(), "picture", &WidgetValue::None, &Attrs::new());
    assert!(html.contains("img-thumbnail hidden"));
    assert!(html.contains(r#"id="id_picture-image""#));
    assert!(html.contains(r#"<label for="id_picture""#));
}

#[test]
fn test_image_input_upload_is_not_previewed() {
    let upload = UploadedFile::new("new.png", "image/png", vec![0x89, 0x50]);
    let files = FileData::new().with("picture", upload);
    let widget = ImageInput::default();
    let value = widget.value_from_data(&FormData::new(), &files, "picture");
    assert!(value.is_upload());
    let html = render(&widget, "picture", &value, &Attrs::new());
    assert!(html.contains("img-thumbnail hidden"));
    assert!(!html.contains("new.png"));
}

#[test]
fn test_wysiwyg_markup() {
    let html = render(
        &WysiwygTextarea::new(Attrs::new().with("class", "form-control")),
        "description",
        &"<p>Oak</p>".into(),
        &Attrs::new(),
    );
    assert!(html.contains(r#"class="form-control wysiwyg""#));
    assert!(html.contains("&lt;p&gt;Oak&lt;&#x2F;p&gt;"));
}

#[test]
fn test_wysiwyg_blank_class() {
    let html = render(&WysiwygTextarea::default(), "body", &WidgetValue::None, &Attrs::new());
    assert!(html.contains(r#"class=" wysiwyg""#));
}

// ============================================================================
// 3. Date/time pickers
// ============================================================================

#[test]
fn test_date_picker_markup() {
    let widget = DatePickerInput::new(Attrs::new(), Some("%d/%m/%Y"));
    let value = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().into();
    let html = render(&widget, "start", &value, &id("id_start"));
    assert!(html.starts_with(
        r#"<div class="input-group date" data-dateFormat="dd&#x2F;mm&#x2F;yyyy" data-oscarWidget="date">"#
    ));
    assert!(html.contains(r#"value="09&#x2F;03&#x2F;2024""#));
    assert!(html.contains(r#"data-inputmask="&#x27;mask&#x27;: &#x27;d&#x2F;m&#x2F;y&#x27;""#));
    assert!(html.contains(r#"<i class="icon-calendar glyphicon-calendar"></i>"#));
}

#[test]
fn test_time_picker_markup() {
    let widget = TimePickerInput::new(Attrs::new(), Some("%H:%M"));
    let value = NaiveTime::from_hms_opt(18, 30, 0).unwrap().into();
    let html = render(&widget, "closes", &value, &Attrs::new());
    assert!(html.contains(r#"data-timeFormat="hh:ii""#));
    assert!(html.contains(r#"data-oscarWidget="time""#));
    assert!(html.contains(r#"value="18:30""#));
    assert!(html.contains("icon-time glyphicon-time"));
}

#[test]
fn test_datetime_picker_default_format() {
    let widget = DateTimePickerInput::default();
    let html = render(&widget, "when", &WidgetValue::None, &Attrs::new());
    // configured formats keep their seconds
    assert!(html.contains(r#"data-datetimeFormat="yyyy-mm-dd hh:ii:ss""#));
    assert!(html.contains(r#"data-inputmask="&#x27;mask&#x27;: &#x27;y-m-d h:s:s&#x27;""#));
}

#[test]
fn test_datetime_picker_explicit_format_drops_seconds() {
    let widget = DateTimePickerInput::new(Attrs::new(), Some("%d/%m/%y %I:%M:%S"), false);
    let html = render(&widget, "when", &WidgetValue::None, &Attrs::new());
    assert!(html.contains(r#"data-datetimeFormat="dd&#x2F;mm&#x2F;yy HH:ii""#));
}

#[test]
fn test_date_picker_uses_active_language_formats() {
    register_locale_formats("xx-int", FormatKey::DateInput, vec!["%d.%m.%Y", "%Y-%m-%d"]);
    activate("xx-int");
    let html = render(&DatePickerInput::default(), "start", &WidgetValue::None, &Attrs::new());
    deactivate();
    clear_locale_formats("xx-int");
    assert!(html.contains(r#"data-dateFormat="dd.mm.yyyy""#));
    assert!(html.contains(r#"data-inputmask="&#x27;mask&#x27;: &#x27;d.m.y&#x27;""#));
}

#[test]
fn test_date_picker_generic_language_fallback() {
    register_locale_formats("yy", FormatKey::TimeInput, vec!["%H.%M"]);
    activate("yy-regional");
    let widget = TimePickerInput::default();
    let format = widget.format();
    deactivate();
    clear_locale_formats("yy");
    assert_eq!(format, "%H.%M");
}

// ============================================================================
// 4. Advanced and remote selects
// ============================================================================

#[test]
fn test_advanced_select_markup() {
    let widget = AdvancedSelect::new(
        Attrs::new(),
        vec![("1", "Standard"), ("2", "Express"), ("3", "Pallet")],
        [3],
    );
    let html = render(&widget, "shipping", &"1".into(), &Attrs::new());
    assert!(html.contains(r#"<option value="1" selected>Standard</option>"#));
    assert!(html.contains(r#"<option value="2">Express</option>"#));
    assert!(html.contains(r#"<option value="3" disabled>Pallet</option>"#));
}

#[test]
fn test_remote_select_markup() {
    let widget = RemoteSelect::builder()
        .lookup_url("/dashboard/catalogue/products/lookup/")
        .build()
        .unwrap();
    let html = render(&widget, "product", &"14".into(), &id("id_product"));
    assert_eq!(
        html,
        r#"<input data-ajax-url="&#x2F;dashboard&#x2F;catalogue&#x2F;products&#x2F;lookup&#x2F;" data-multiple="" data-required="" id="id_product" name="product" type="hidden" value="14">"#
    );
}

#[test]
fn test_multiple_remote_select_round_trip() {
    let widget = RemoteSelect::builder()
        .lookup_url("/lookup/")
        .multiple(true)
        .build()
        .unwrap();
    let html = render(
        &widget,
        "ids",
        &WidgetValue::List(vec!["4".into(), String::new(), "9".into()]),
        &Attrs::new(),
    );
    assert!(html.contains(r#"value="4,9""#));
    assert!(html.contains(r#"data-multiple="multiple""#));

    let data = FormData::parse("ids=4%2C9%2C");
    assert_eq!(
        widget.value_from_data(&data, &FileData::new(), "ids"),
        WidgetValue::List(vec!["4".into(), "9".into()])
    );
}

#[test]
fn test_remote_select_missing_url() {
    let err = RemoteSelect::builder().multiple(true).build().unwrap_err();
    assert!(matches!(err, ShopfrontError::ImproperlyConfigured(_)));
}

// ============================================================================
// 5. Template overrides
// ============================================================================

#[test]
fn test_project_template_override() {
    let mut renderer = Renderer::new().unwrap();
    renderer
        .add_raw_template(
            "widgets/date_time_picker.html",
            r#"<span data-icon="{{ icon_classes }}">{% include "widgets/input.html" %}</span>"#,
        )
        .unwrap();
    let widget = TimePickerInput::new(Attrs::new(), Some("%H:%M"));
    let html = widget
        .render("t", &WidgetValue::None, &Attrs::new(), &renderer)
        .unwrap();
    assert!(html.starts_with(r#"<span data-icon="icon-time glyphicon-time"><input type="text" name="t""#));
}

#[test]
fn test_missing_template_is_reported() {
    let renderer = Renderer::new().unwrap();
    let context = TextInput::default().get_context("q", &WidgetValue::None, &Attrs::new());
    let err = renderer.render("widgets/unknown.html", &context).unwrap_err();
    assert!(matches!(err, ShopfrontError::TemplateDoesNotExist(_)));
}
