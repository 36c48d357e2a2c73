//! Core error type for shopfront.
//!
//! [`ShopfrontError`] covers the few ways the widget layer can fail:
//! misconfiguration (a remote select without a lookup URL, unreadable
//! settings), template problems while rendering, and attempts to mutate
//! immutable submitted data.

use thiserror::Error;

/// The primary error type for shopfront.
#[derive(Error, Debug)]
pub enum ShopfrontError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A component was constructed without a value it cannot work without.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Templates ────────────────────────────────────────────────────

    /// A template contains invalid syntax.
    #[error("Template syntax error: {0}")]
    TemplateSyntaxError(String),

    /// The requested template is not registered with the renderer.
    #[error("Template does not exist: {0}")]
    TemplateDoesNotExist(String),

    /// Rendering a template failed.
    #[error("Template error: {0}")]
    TemplateError(String),

    // ── Security ─────────────────────────────────────────────────────

    /// A potentially malicious operation was detected.
    #[error("Suspicious operation: {0}")]
    SuspiciousOperation(String),
}

/// A convenience type alias for `Result<T, ShopfrontError>`.
pub type ShopfrontResult<T> = Result<T, ShopfrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_display() {
        let err = ShopfrontError::TemplateDoesNotExist("widgets/x.html".into());
        assert_eq!(err.to_string(), "Template does not exist: widgets/x.html");
    }

    #[test]
    fn test_suspicious_operation_display() {
        let err = ShopfrontError::SuspiciousOperation("immutable".into());
        assert_eq!(err.to_string(), "Suspicious operation: immutable");
    }

    #[test]
    fn test_display() {
        let err = ShopfrontError::ImproperlyConfigured("RemoteSelect requires a lookup URL".into());
        assert_eq!(
            err.to_string(),
            "Improperly configured: RemoteSelect requires a lookup URL"
        );
    }
}
