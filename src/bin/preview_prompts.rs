//! Preview prompts binary - applies a language restriction and prints the
//! resulting save-device strings as JSON
//!
//! Usage:
//!   cargo run --bin preview-prompts -- en fr      # Restrict to English and French
//!   EASYSTORAGE_LOCALE=ja-JP cargo run -- de es   # Pretend the host runs Japanese
//!
//! Optional environment variables:
//! - EASYSTORAGE_LOCALE (defaults to the OS locale)
//! - EASYSTORAGE_PROMPTS (standard | promptless)

use anyhow::{Context, Result};
use easystorage_settings::config::Config;
use easystorage_settings::locale::{LocaleSource, SystemLocale};
use easystorage_settings::{EasyStorageSettings, Language, SaveDevice};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("easystorage_settings=info".parse()?),
        )
        .init();

    let languages = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Language>())
        .collect::<Result<Vec<_>>>()
        .context("Arguments must be language codes (de, es, fr, it, ja, en)")?;

    let config = Config::from_env()?;
    info!(
        "Locale: {}",
        config
            .locale_override
            .clone()
            .or_else(|| SystemLocale.current_locale())
            .unwrap_or_else(|| "<none>".to_string())
    );

    let settings = EasyStorageSettings::from_config(&config);
    let device = SaveDevice::global();
    let outcome = settings
        .set_supported_languages(device, &languages)
        .context("Failed to apply supported languages")?;
    info!("Outcome: {:?}", outcome);

    let json = serde_json::to_string_pretty(&device.snapshot())?;
    println!("{}", json);
    Ok(())
}
