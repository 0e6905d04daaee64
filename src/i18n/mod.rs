//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Fixed code/locale-tag tables for every supported language
//! - `language`: The closed `Language` enumeration
//! - `strings`: Default English prompt text for the save device
//!
//! # Example
//!
//! ```rust
//! use easystorage_settings::i18n::{Language, LanguageRegistry};
//!
//! let registry = LanguageRegistry::get();
//! assert_eq!(registry.code_to_language("ja"), Some(Language::Japanese));
//! assert_eq!(registry.language_to_culture_tag(Language::French), "fr-FR");
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{PromptStrings, DEFAULT_STRINGS, STRINGS_VERSION};
