//! # shopfront-core
//!
//! Core types shared by the shopfront crates. Nothing in here knows about
//! widgets; it provides the configuration, error and formatting foundation
//! the form layer builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error type and result alias
//! - [`settings`] - Settings struct and the global [`SETTINGS`] instance
//! - [`settings_loader`] - Loading settings from TOML/JSON and the environment
//! - [`formats`] - Date/time input format lookup with per-language overrides
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - `MultiValueDict` for submitted fields and files

pub mod error;
pub mod formats;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

pub use error::{ShopfrontError, ShopfrontResult};
pub use formats::FormatKey;
pub use settings::{Settings, SETTINGS};
