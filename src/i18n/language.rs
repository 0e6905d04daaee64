//! Language type: the closed set of languages EasyStorage ships prompts for.
//!
//! Every variant has an entry in the [`LanguageRegistry`], which holds the
//! ISO code and locale tag for it. The accessors below are thin views over
//! that registry.

use crate::error::{InvalidReason, SettingsError};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language supported by EasyStorage.
///
/// Variants are declared in registry order; the discriminants (0..=5) are the
/// raw values accepted by [`Language::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "de")]
    German = 0,
    #[serde(rename = "es")]
    Spanish = 1,
    #[serde(rename = "fr")]
    French = 2,
    #[serde(rename = "it")]
    Italian = 3,
    #[serde(rename = "ja")]
    Japanese = 4,
    #[serde(rename = "en")]
    English = 5,
}

impl Language {
    /// All languages, in declaration order.
    pub const ALL: [Language; 6] = [
        Language::German,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::English,
    ];

    /// Lowest defined language value.
    pub const MIN: Language = Language::German;

    /// Highest defined language value.
    pub const MAX: Language = Language::English;

    /// Look up a language by its lowercase two-letter code.
    ///
    /// Returns `None` for anything the registry does not hold, including
    /// upper-case spellings such as `"DE"`.
    pub fn from_code(code: &str) -> Option<Language> {
        LanguageRegistry::get().code_to_language(code)
    }

    /// Position of this language in [`Language::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Get the full language configuration from the registry.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(self)
    }

    /// Get the ISO 639-1 language code (e.g., "de", "ja").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// Get the locale tag used to build a full locale (e.g., "fr-FR").
    pub fn culture_tag(self) -> &'static str {
        LanguageRegistry::get().language_to_culture_tag(self)
    }

    /// Get the English name of the language.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    /// Parse an ISO code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_lowercase();
        match Language::from_code(&code) {
            Some(language) => Ok(language),
            None => bail!("Unknown language code: '{}'", s),
        }
    }
}

impl TryFrom<i32> for Language {
    type Error = SettingsError;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        if value < Language::MIN as i32 || value > Language::MAX as i32 {
            return Err(SettingsError::invalid(
                "supported_languages",
                InvalidReason::OutOfRange(value),
            ));
        }
        // Bounds checked above, so the index is always valid
        Ok(Language::ALL[value as usize])
    }
}
