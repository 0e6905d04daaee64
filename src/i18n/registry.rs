//! Language registry: Single source of truth for all supported languages.
//!
//! Holds the two fixed tables EasyStorage needs: two-letter locale code to
//! [`Language`], and [`Language`] to locale tag. It uses a singleton pattern
//! with `OnceLock`; the tables are never mutated after initialization.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The enumeration member this entry describes
    pub language: Language,

    /// ISO 639-1 language code, lowercase (e.g., "de", "ja")
    pub code: &'static str,

    /// Language plus an arbitrary region (e.g., "de-DE"). Only the language
    /// subtag is meaningful.
    pub culture_tag: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    /// Indexed by `Language as usize`
    languages: Vec<LanguageConfig>,
    by_code: HashMap<&'static str, Language>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::from_configs(default_languages()))
    }

    fn from_configs(languages: Vec<LanguageConfig>) -> Self {
        let by_code = languages
            .iter()
            .map(|config| (config.code, config.language))
            .collect();
        Self { languages, by_code }
    }

    /// Find the language registered under a two-letter code.
    ///
    /// The lookup is exact: keys are stored lowercase, so callers must
    /// lower-case system-reported codes first.
    ///
    /// # Returns
    /// * `Some(Language)` if the code is one of the six registered codes
    /// * `None` otherwise
    pub fn code_to_language(&self, code: &str) -> Option<Language> {
        self.by_code.get(code).copied()
    }

    /// Get the locale tag for a language. Total over [`Language`].
    pub fn language_to_culture_tag(&self, language: Language) -> &'static str {
        self.config(language).culture_tag
    }

    /// Get the full configuration entry for a language.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Get all language configurations, in enumeration order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

/// Default language configurations, one per [`Language`] variant in
/// declaration order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::German,
            code: "de",
            culture_tag: "de-DE",
            name: "German",
            native_name: "Deutsch",
        },
        LanguageConfig {
            language: Language::Spanish,
            code: "es",
            culture_tag: "es-ES",
            name: "Spanish",
            native_name: "Español",
        },
        LanguageConfig {
            language: Language::French,
            code: "fr",
            culture_tag: "fr-FR",
            name: "French",
            native_name: "Français",
        },
        LanguageConfig {
            language: Language::Italian,
            code: "it",
            culture_tag: "it-IT",
            name: "Italian",
            native_name: "Italiano",
        },
        LanguageConfig {
            language: Language::Japanese,
            code: "ja",
            culture_tag: "ja-JP",
            name: "Japanese",
            native_name: "日本語",
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            culture_tag: "en-US",
            name: "English",
            native_name: "English",
        },
    ]
}
