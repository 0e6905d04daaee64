//! Host locale detection.
//!
//! The operating system reports locales in several shapes ("de-DE",
//! "fr_FR.UTF-8", "ja", "C"). Detection only cares about the leading
//! language subtag, lower-cased and looked up in the [`LanguageRegistry`].

use crate::i18n::{Language, LanguageRegistry};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Something that can report the currently active locale.
pub trait LocaleSource: Send + Sync {
    /// The active locale tag, or `None` if the host reports nothing.
    fn current_locale(&self) -> Option<String>;
}

/// Reads the locale from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn current_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Always reports the same locale tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub String);

impl FixedLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl LocaleSource for FixedLocale {
    fn current_locale(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<T: LocaleSource + ?Sized> LocaleSource for Box<T> {
    fn current_locale(&self) -> Option<String> {
        (**self).current_locale()
    }
}

static SUBTAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn subtag_regex() -> &'static Regex {
    // Primary subtag, then end of input or a region/encoding/modifier separator
    SUBTAG_REGEX.get_or_init(|| Regex::new(r"^([A-Za-z]{2,3})(?:$|[-_.@])").unwrap())
}

/// Extract the lowercase ISO 639 language code from a locale tag.
///
/// Returns `None` for POSIX placeholders ("C", "POSIX") and for anything
/// without a leading alphabetic subtag. Three-letter codes are returned as-is;
/// they never match the registry, which only holds two-letter codes.
pub fn language_code(locale: &str) -> Option<String> {
    let locale = locale.trim();
    if locale.eq_ignore_ascii_case("posix") {
        return None;
    }

    subtag_regex()
        .captures(locale)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Detect the active language reported by `source`.
///
/// `None` means the host language is not one EasyStorage knows; this is the
/// "unsupported" outcome, never an error.
pub fn detect_language(source: &dyn LocaleSource) -> Option<Language> {
    let Some(locale) = source.current_locale() else {
        debug!("Host reported no locale");
        return None;
    };

    let detected = language_code(&locale)
        .and_then(|code| LanguageRegistry::get().code_to_language(&code));

    debug!(locale = %locale, detected = ?detected, "Detected host language");
    detected
}
