//! Integration tests for supported-language settings
//!
//! These tests drive the public API end to end with fixed host locales and
//! local save devices, so they never depend on the machine's real locale.

use proptest::prelude::*;

use easystorage_settings::locale::FixedLocale;
use easystorage_settings::{
    EasyStorageSettings, InvalidReason, Language, LanguageSupport, PromptField, PromptStrategy,
    PromptSurface, SaveDevice, SaveDeviceStrings,
};

// ==================== Test Helpers ====================

fn controller(locale: &str) -> EasyStorageSettings {
    EasyStorageSettings::new(FixedLocale::new(locale)).with_strategy(PromptStrategy::Standard)
}

/// A device whose prompts have all been localized by the host
fn localized_device() -> SaveDevice {
    let device = SaveDevice::new();
    device.write_prompt(PromptField::OkOption, "D'accord");
    device.write_prompt(PromptField::YesOption, "Oui. Choisir un nouveau périphérique.");
    device.write_prompt(PromptField::NoOption, "Non. Continuer sans périphérique.");
    device.write_prompt(PromptField::DeviceOptionalTitle, "Choisir à nouveau");
    device.write_prompt(PromptField::DeviceRequiredTitle, "Périphérique requis");
    device.write_prompt(PromptField::ForceDisconnectedReselectionMessage, "Déconnecté.");
    device.write_prompt(PromptField::PromptForDisconnectedMessage, "Déconnecté ?");
    device.write_prompt(PromptField::ForceCancelledReselectionMessage, "Annulé.");
    device.write_prompt(PromptField::PromptForCancelledMessage, "Annulé ?");
    device
}

// ==================== Scenario Tests ====================

#[test]
fn test_french_host_with_french_supported() {
    let device = localized_device();
    let before = device.snapshot();

    let outcome = controller("fr")
        .set_supported_languages(&device, &[Language::French, Language::English])
        .expect("Should accept languages");

    assert!(outcome.is_supported());
    assert_eq!(device.snapshot(), before);
    assert_eq!(device.prompt(PromptField::OkOption), "D'accord");
}

#[test]
fn test_portuguese_host_resets_all_nine_strings() {
    let device = localized_device();

    controller("pt")
        .set_supported_languages(&device, &[Language::English])
        .expect("Should accept languages");

    let strings = device.snapshot();
    assert_eq!(strings.ok_option, "Ok");
    assert_eq!(strings.yes_option, "Yes. Select new device.");
    assert_eq!(strings.no_option, "No. Continue without device.");
    assert_eq!(strings.device_optional_title, "Reselect Storage Device");
    assert_eq!(strings.device_required_title, "Storage Device Required");
    assert_eq!(
        strings.force_disconnected_reselection_message,
        "The storage device was disconnected. A storage device is required to continue."
    );
    assert_eq!(
        strings.prompt_for_disconnected_message,
        "The storage device was disconnected. You can continue without a device, but you will not be able to save. Would you like to select a storage device?"
    );
    assert_eq!(
        strings.force_cancelled_reselection_message,
        "forceCanceledReselectionMessage"
    );
    assert_eq!(
        strings.prompt_for_cancelled_message,
        "No storage device was selected. You can continue without a device, but you will not be able to save. Would you like to select a storage device?"
    );
}

#[test]
fn test_japanese_host_with_european_languages_resets() {
    let device = localized_device();

    let outcome = controller("ja-JP")
        .set_supported_languages(&device, &[Language::German, Language::Spanish])
        .expect("Should accept languages");

    assert_eq!(
        outcome,
        LanguageSupport::Unsupported {
            detected: Some(Language::Japanese)
        }
    );
    assert_eq!(device.snapshot(), SaveDeviceStrings::defaults());
}

#[test]
fn test_posix_c_locale_counts_as_unsupported() {
    let device = localized_device();

    let outcome = controller("C.UTF-8")
        .set_supported_languages(&device, &Language::ALL)
        .expect("Should accept languages");

    assert_eq!(outcome, LanguageSupport::Unsupported { detected: None });
    assert!(device.snapshot().is_default());
}

#[test]
fn test_strings_set_after_restriction_survive() {
    let device = SaveDevice::new();
    let settings = controller("de-DE");

    settings
        .set_supported_languages(&device, &[Language::German])
        .expect("Should accept languages");
    device.write_prompt(PromptField::OkOption, "OK");

    settings
        .set_supported_languages(&device, &[Language::German, Language::English])
        .expect("Should accept languages");
    assert_eq!(device.prompt(PromptField::OkOption), "OK");
}

// ==================== Validation Tests ====================

#[test]
fn test_empty_languages_rejected_without_writes() {
    let device = localized_device();
    let before = device.snapshot();

    let err = controller("pt")
        .set_supported_languages(&device, &[])
        .unwrap_err();

    assert_eq!(err.reason(), InvalidReason::Empty);
    assert_eq!(device.snapshot(), before);
}

#[test]
fn test_absent_values_rejected_without_writes() {
    let device = localized_device();
    let before = device.snapshot();

    let err = controller("pt")
        .set_supported_language_values(&device, None)
        .unwrap_err();

    assert_eq!(err.reason(), InvalidReason::Missing);
    assert_eq!(device.snapshot(), before);
}

#[test]
fn test_out_of_range_value_rejected_without_writes() {
    let device = localized_device();
    let before = device.snapshot();

    let err = controller("pt")
        .set_supported_language_values(&device, Some(&[7]))
        .unwrap_err();

    assert_eq!(err.reason(), InvalidReason::OutOfRange(7));
    assert!(err.to_string().contains("invalid argument"));
    assert_eq!(device.snapshot(), before);
}

// ==================== Reset Tests ====================

#[test]
fn test_reset_twice_equals_reset_once() {
    let once = localized_device();
    let twice = localized_device();
    let settings = controller("en");

    settings.reset_save_device_strings(&once);
    settings.reset_save_device_strings(&twice);
    settings.reset_save_device_strings(&twice);

    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn test_promptless_target_never_writes() {
    let device = localized_device();
    let before = device.snapshot();
    let settings = controller("pt").with_strategy(PromptStrategy::Promptless);

    settings
        .set_supported_languages(&device, &[Language::English])
        .expect("Should accept languages");
    settings.reset_save_device_strings(&device);

    assert_eq!(device.snapshot(), before);
}

// ==================== Property Tests ====================

const HOST_CODES: [&str; 8] = ["de", "es", "fr", "it", "ja", "en", "pt", "zh"];

fn language_sets() -> impl Strategy<Value = Vec<Language>> {
    proptest::sample::subsequence(Language::ALL.to_vec(), 1..=Language::ALL.len())
}

proptest! {
    #[test]
    fn prop_member_host_language_leaves_prompts(
        set in language_sets(),
        pick in any::<prop::sample::Index>(),
    ) {
        let host = *pick.get(&set);
        let device = localized_device();
        let before = device.snapshot();

        let outcome = controller(host.culture_tag())
            .set_supported_languages(&device, &set)
            .unwrap();

        prop_assert_eq!(outcome, LanguageSupport::Supported(host));
        prop_assert_eq!(device.snapshot(), before);
    }

    #[test]
    fn prop_non_member_host_language_resets(
        set in language_sets(),
        code in prop::sample::select(HOST_CODES.to_vec()),
    ) {
        let member = Language::from_code(code).map_or(false, |l| set.contains(&l));
        prop_assume!(!member);

        let device = localized_device();
        let outcome = controller(code)
            .set_supported_languages(&device, &set)
            .unwrap();

        prop_assert!(!outcome.is_supported());
        prop_assert_eq!(device.snapshot(), SaveDeviceStrings::defaults());
    }

    #[test]
    fn prop_out_of_range_values_always_rejected(
        mut values in prop::collection::vec(0i32..=5, 0..6),
        bad in prop_oneof![i32::MIN..0, 6..i32::MAX],
        at in any::<prop::sample::Index>(),
    ) {
        let position = at.index(values.len() + 1);
        values.insert(position, bad);

        let device = localized_device();
        let before = device.snapshot();
        let err = controller("pt")
            .set_supported_language_values(&device, Some(&values))
            .unwrap_err();

        prop_assert_eq!(err.reason(), InvalidReason::OutOfRange(bad));
        prop_assert_eq!(device.snapshot(), before);
    }
}
