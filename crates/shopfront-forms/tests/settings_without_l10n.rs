//! Widgets on a site that turns localized formats off.
//!
//! Runs in its own process so it can configure settings independently of the
//! other integration tests.

use std::sync::Once;

use shopfront_core::formats::{activate, deactivate, register_locale_formats};
use shopfront_core::{FormatKey, Settings, SETTINGS};
use shopfront_forms::{Attrs, DatePickerInput, Widget, WidgetValue};

fn configure() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        SETTINGS.configure(Settings {
            language_code: "fr".to_string(),
            use_l10n: false,
            date_input_formats: vec!["%d.%m.%Y".to_string()],
            ..Settings::default()
        });
        register_locale_formats("fr", FormatKey::DateInput, vec!["%Y/%m/%d"]);
    });
}

#[test]
fn test_registered_locale_is_ignored() {
    configure();
    let widget = DatePickerInput::default();
    assert_eq!(widget.format(), "%d.%m.%Y");
    let ctx = widget.get_context("start", &WidgetValue::None, &Attrs::new());
    assert_eq!(ctx.get("div_attrs").unwrap()["data-dateFormat"], "dd.mm.yyyy");
}

#[test]
fn test_active_language_is_ignored() {
    configure();
    activate("fr");
    let format = DatePickerInput::default().format();
    deactivate();
    assert_eq!(format, "%d.%m.%Y");
}
