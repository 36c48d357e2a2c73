//! # shopfront
//!
//! Storefront form widgets for Rust.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `shopfront` to get everything, or on the individual
//! crates for finer-grained control.

/// Settings, errors, input formats and logging.
pub use shopfront_core as core;

/// Widgets, picker format translation and template rendering.
#[cfg(feature = "forms")]
pub use shopfront_forms as forms;

pub use chrono;
pub use serde_json;
pub use tracing;
