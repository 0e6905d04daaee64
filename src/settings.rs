//! Supported-language settings for EasyStorage.
//!
//! Hosts declare which languages they ship prompt text for. When the host
//! system runs any other language, the save-device prompts are reset to the
//! English defaults so players never see text for an unsupported language.

use crate::config::Config;
use crate::error::{InvalidReason, SettingsError};
use crate::i18n::Language;
use crate::locale::{detect_language, FixedLocale, LocaleSource, SystemLocale};
use crate::save_device::{PromptField, PromptSurface, SaveDevice};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info};

const ARGUMENT: &str = "supported_languages";

/// How settings calls treat the save-device prompts on this target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStrategy {
    /// Prompts are shown; resets write the defaults
    Standard,
    /// The target never shows these prompts; writes are skipped
    Promptless,
}

impl PromptStrategy {
    /// Strategy chosen at build time through the `promptless` feature.
    pub fn for_target() -> Self {
        if cfg!(feature = "promptless") {
            PromptStrategy::Promptless
        } else {
            PromptStrategy::Standard
        }
    }

    pub fn writes_prompts(self) -> bool {
        self == PromptStrategy::Standard
    }
}

impl Default for PromptStrategy {
    fn default() -> Self {
        Self::for_target()
    }
}

impl FromStr for PromptStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(PromptStrategy::Standard),
            "promptless" => Ok(PromptStrategy::Promptless),
            other => bail!("Unknown prompt strategy: '{}'", other),
        }
    }
}

/// A validated, non-empty set of languages.
///
/// Duplicates are dropped; the first occurrence of each language keeps its
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    languages: Vec<Language>,
}

impl SupportedLanguages {
    pub fn new(languages: &[Language]) -> Result<Self, SettingsError> {
        if languages.is_empty() {
            return Err(SettingsError::invalid(ARGUMENT, InvalidReason::Empty));
        }

        let mut unique = Vec::with_capacity(languages.len());
        for language in languages {
            if !unique.contains(language) {
                unique.push(*language);
            }
        }
        Ok(Self { languages: unique })
    }

    /// Validate raw language values supplied by a host.
    ///
    /// Every value is checked before anything is returned, so a bad value
    /// anywhere in the input rejects the whole call.
    pub fn from_values(values: Option<&[i32]>) -> Result<Self, SettingsError> {
        let values =
            values.ok_or_else(|| SettingsError::invalid(ARGUMENT, InvalidReason::Missing))?;
        if values.is_empty() {
            return Err(SettingsError::invalid(ARGUMENT, InvalidReason::Empty));
        }

        let languages = values
            .iter()
            .map(|value| Language::try_from(*value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&languages)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// The first language the caller listed.
    pub fn first(&self) -> Language {
        self.languages[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Never true for a validated set.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Outcome of declaring the supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSupport {
    /// The host language is in the set; prompts were left alone
    Supported(Language),
    /// The host language is outside the set, or not one EasyStorage knows
    /// (`detected: None`); prompts were reset
    Unsupported { detected: Option<Language> },
}

impl LanguageSupport {
    pub fn is_supported(&self) -> bool {
        matches!(self, LanguageSupport::Supported(_))
    }
}

/// Settings controller.
pub struct EasyStorageSettings {
    locale: Box<dyn LocaleSource>,
    strategy: PromptStrategy,
}

impl EasyStorageSettings {
    pub fn new(locale: impl LocaleSource + 'static) -> Self {
        Self {
            locale: Box::new(locale),
            strategy: PromptStrategy::for_target(),
        }
    }

    pub fn with_strategy(mut self, strategy: PromptStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build a controller from configuration: the configured locale override
    /// if present, the OS locale otherwise.
    pub fn from_config(config: &Config) -> Self {
        let settings = match &config.locale_override {
            Some(tag) => Self::new(FixedLocale::new(tag.clone())),
            None => Self::new(SystemLocale),
        };
        settings.with_strategy(config.prompt_strategy)
    }

    pub fn strategy(&self) -> PromptStrategy {
        self.strategy
    }

    /// Restrict EasyStorage to `languages`.
    ///
    /// If the host language is not among them, the prompts on `surface` are
    /// reset to their English defaults. The documented fallback to the first
    /// listed language is not applied; use [`SupportedLanguages::first`] to
    /// pick it yourself.
    ///
    /// # Errors
    /// `InvalidArgument` if `languages` is empty. Nothing is written.
    pub fn set_supported_languages(
        &self,
        surface: &dyn PromptSurface,
        languages: &[Language],
    ) -> Result<LanguageSupport, SettingsError> {
        let supported = SupportedLanguages::new(languages)?;
        Ok(self.apply(surface, &supported))
    }

    /// Like [`set_supported_languages`](Self::set_supported_languages), for
    /// raw language values.
    ///
    /// # Errors
    /// `InvalidArgument` if `values` is `None`, empty, or holds any value
    /// outside German..=English. Nothing is written.
    pub fn set_supported_language_values(
        &self,
        surface: &dyn PromptSurface,
        values: Option<&[i32]>,
    ) -> Result<LanguageSupport, SettingsError> {
        let supported = SupportedLanguages::from_values(values)?;
        Ok(self.apply(surface, &supported))
    }

    /// Check the host language against an already validated set.
    pub fn apply(
        &self,
        surface: &dyn PromptSurface,
        supported: &SupportedLanguages,
    ) -> LanguageSupport {
        let detected = detect_language(self.locale.as_ref());

        match detected {
            Some(language) if supported.contains(language) => {
                debug!(language = %language, "Host language is supported");
                LanguageSupport::Supported(language)
            }
            _ => {
                info!(
                    detected = ?detected,
                    supported = supported.len(),
                    "Host language is unsupported, resetting save device strings"
                );
                self.reset_save_device_strings(surface);
                LanguageSupport::Unsupported { detected }
            }
        }
    }

    /// Reset every prompt on `surface` to its English default.
    pub fn reset_save_device_strings(&self, surface: &dyn PromptSurface) {
        if !self.strategy.writes_prompts() {
            debug!("Prompts are not shown on this target, skipping reset");
            return;
        }

        for field in PromptField::ALL {
            surface.write_prompt(field, field.default_text());
        }
        debug!("Save device strings reset to defaults");
    }
}

/// Global controller (built lazily from the environment)
static SETTINGS: OnceLock<EasyStorageSettings> = OnceLock::new();

impl EasyStorageSettings {
    /// Get the global controller.
    ///
    /// The first call reads [`Config::from_env`]; an invalid environment falls
    /// back to the defaults.
    pub fn global() -> &'static EasyStorageSettings {
        SETTINGS.get_or_init(|| {
            let config = Config::from_env().unwrap_or_else(|e| {
                tracing::warn!("Ignoring EasyStorage environment: {:#}", e);
                Config::default()
            });
            EasyStorageSettings::from_config(&config)
        })
    }
}

/// Restrict EasyStorage to `languages`, resetting the global save device's
/// prompts if the host language is not among them.
///
/// This resets the strings whenever the host language is unsupported, so
/// call it before setting your own strings on the save device.
pub fn set_supported_languages(languages: &[Language]) -> Result<LanguageSupport, SettingsError> {
    EasyStorageSettings::global().set_supported_languages(SaveDevice::global(), languages)
}

/// Reset the global save device's prompts to their English defaults.
pub fn reset_save_device_strings() {
    EasyStorageSettings::global().reset_save_device_strings(SaveDevice::global());
}
