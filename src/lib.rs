//! Supported-language settings for EasyStorage save devices.
//!
//! ```rust
//! use easystorage_settings::{settings, Language};
//!
//! // Resets the save-device prompts to English when the host runs any
//! // other language.
//! settings::set_supported_languages(&[Language::English, Language::French])?;
//! # Ok::<(), easystorage_settings::SettingsError>(())
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod save_device;
pub mod settings;

pub use error::{InvalidReason, SettingsError};
pub use i18n::Language;
pub use save_device::{PromptField, PromptSurface, SaveDevice, SaveDeviceStrings};
pub use settings::{EasyStorageSettings, LanguageSupport, PromptStrategy, SupportedLanguages};
