/// Default text for every save-device prompt.
///
/// Only English defaults ship; hosts that support other languages set their
/// own text on the save device after restricting the supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStrings {
    // ==================== Options ====================
    /// Label for the acknowledge button
    pub ok_option: &'static str,

    /// Label for choosing a new storage device
    pub yes_option: &'static str,

    /// Label for continuing without a storage device
    pub no_option: &'static str,

    // ==================== Titles ====================
    /// Title when the player may continue without a device
    pub device_optional_title: &'static str,

    /// Title when a device must be selected
    pub device_required_title: &'static str,

    // ==================== Messages ====================
    /// Disconnected, and a device is mandatory
    pub force_disconnected_reselection_message: &'static str,

    /// Disconnected, and the player may continue without saving
    pub prompt_for_disconnected_message: &'static str,

    /// Selection cancelled, and a device is mandatory
    pub force_cancelled_reselection_message: &'static str,

    /// Selection cancelled, and the player may continue without saving
    pub prompt_for_cancelled_message: &'static str,
}

/// Bumped whenever any default text in [`DEFAULT_STRINGS`] changes.
pub const STRINGS_VERSION: u32 = 1;

// ==================== English Strings ====================

/// English defaults written by a save-device strings reset.
pub const DEFAULT_STRINGS: PromptStrings = PromptStrings {
    // Options
    ok_option: "Ok",
    yes_option: "Yes. Select new device.",
    no_option: "No. Continue without device.",

    // Titles
    device_optional_title: "Reselect Storage Device",
    device_required_title: "Storage Device Required",

    // Messages
    force_disconnected_reselection_message:
        "The storage device was disconnected. A storage device is required to continue.",
    prompt_for_disconnected_message: "The storage device was disconnected. \
You can continue without a device, but you will not be able to save. \
Would you like to select a storage device?",
    // Shipped as a bare token, not prose
    force_cancelled_reselection_message: "forceCanceledReselectionMessage",
    prompt_for_cancelled_message: "No storage device was selected. \
You can continue without a device, but you will not be able to save. \
Would you like to select a storage device?",
};
