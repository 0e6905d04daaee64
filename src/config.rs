use crate::settings::PromptStrategy;
use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Locale tag used instead of the OS locale (e.g. "fr-FR")
    pub locale_override: Option<String>,

    // Whether settings calls write to the save device at all
    pub prompt_strategy: PromptStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locale_override: std::env::var("EASYSTORAGE_LOCALE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),

            prompt_strategy: match std::env::var("EASYSTORAGE_PROMPTS") {
                Ok(value) => value
                    .parse()
                    .context("EASYSTORAGE_PROMPTS must be 'standard' or 'promptless'")?,
                Err(_) => PromptStrategy::for_target(),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_override: None,
            prompt_strategy: PromptStrategy::for_target(),
        }
    }
}
