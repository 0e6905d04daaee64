//! Save-device prompt surface.
//!
//! The save device shows nine user-facing prompts when a storage device is
//! disconnected or a selection is cancelled. The settings controller writes
//! these fields through [`PromptSurface`]; [`SaveDevice::global`] is the
//! process-wide device the library's own dialogs read from.

use crate::i18n::{PromptStrings, DEFAULT_STRINGS};
use serde::{Deserialize, Serialize};
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One named prompt field on the save device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptField {
    OkOption,
    YesOption,
    NoOption,
    DeviceOptionalTitle,
    DeviceRequiredTitle,
    ForceDisconnectedReselectionMessage,
    PromptForDisconnectedMessage,
    ForceCancelledReselectionMessage,
    PromptForCancelledMessage,
}

impl PromptField {
    /// Every field, in display order.
    pub const ALL: [PromptField; 9] = [
        PromptField::OkOption,
        PromptField::YesOption,
        PromptField::NoOption,
        PromptField::DeviceOptionalTitle,
        PromptField::DeviceRequiredTitle,
        PromptField::ForceDisconnectedReselectionMessage,
        PromptField::PromptForDisconnectedMessage,
        PromptField::ForceCancelledReselectionMessage,
        PromptField::PromptForCancelledMessage,
    ];

    /// The field's name as the save device exposes it.
    pub fn name(self) -> &'static str {
        match self {
            PromptField::OkOption => "OkOption",
            PromptField::YesOption => "YesOption",
            PromptField::NoOption => "NoOption",
            PromptField::DeviceOptionalTitle => "DeviceOptionalTitle",
            PromptField::DeviceRequiredTitle => "DeviceRequiredTitle",
            PromptField::ForceDisconnectedReselectionMessage => {
                "ForceDisconnectedReselectionMessage"
            }
            PromptField::PromptForDisconnectedMessage => "PromptForDisconnectedMessage",
            PromptField::ForceCancelledReselectionMessage => "ForceCancelledReselectionMessage",
            PromptField::PromptForCancelledMessage => "PromptForCancelledMessage",
        }
    }

    /// Select this field's text out of a string table.
    pub fn text_in(self, strings: &PromptStrings) -> &'static str {
        match self {
            PromptField::OkOption => strings.ok_option,
            PromptField::YesOption => strings.yes_option,
            PromptField::NoOption => strings.no_option,
            PromptField::DeviceOptionalTitle => strings.device_optional_title,
            PromptField::DeviceRequiredTitle => strings.device_required_title,
            PromptField::ForceDisconnectedReselectionMessage => {
                strings.force_disconnected_reselection_message
            }
            PromptField::PromptForDisconnectedMessage => strings.prompt_for_disconnected_message,
            PromptField::ForceCancelledReselectionMessage => {
                strings.force_cancelled_reselection_message
            }
            PromptField::PromptForCancelledMessage => strings.prompt_for_cancelled_message,
        }
    }

    /// The English default for this field.
    pub fn default_text(self) -> &'static str {
        self.text_in(&DEFAULT_STRINGS)
    }
}

/// A writable set of prompt fields.
pub trait PromptSurface: Send + Sync {
    /// Replace the text of one field.
    fn write_prompt(&self, field: PromptField, text: &str);
}

/// Snapshot of every prompt field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveDeviceStrings {
    pub ok_option: String,
    pub yes_option: String,
    pub no_option: String,
    pub device_optional_title: String,
    pub device_required_title: String,
    pub force_disconnected_reselection_message: String,
    pub prompt_for_disconnected_message: String,
    pub force_cancelled_reselection_message: String,
    pub prompt_for_cancelled_message: String,
}

impl SaveDeviceStrings {
    /// A snapshot holding the English defaults.
    pub fn defaults() -> Self {
        Self::from_table(&DEFAULT_STRINGS)
    }

    pub fn from_table(strings: &PromptStrings) -> Self {
        Self {
            ok_option: strings.ok_option.to_string(),
            yes_option: strings.yes_option.to_string(),
            no_option: strings.no_option.to_string(),
            device_optional_title: strings.device_optional_title.to_string(),
            device_required_title: strings.device_required_title.to_string(),
            force_disconnected_reselection_message: strings
                .force_disconnected_reselection_message
                .to_string(),
            prompt_for_disconnected_message: strings.prompt_for_disconnected_message.to_string(),
            force_cancelled_reselection_message: strings
                .force_cancelled_reselection_message
                .to_string(),
            prompt_for_cancelled_message: strings.prompt_for_cancelled_message.to_string(),
        }
    }

    pub fn get(&self, field: PromptField) -> &str {
        match field {
            PromptField::OkOption => &self.ok_option,
            PromptField::YesOption => &self.yes_option,
            PromptField::NoOption => &self.no_option,
            PromptField::DeviceOptionalTitle => &self.device_optional_title,
            PromptField::DeviceRequiredTitle => &self.device_required_title,
            PromptField::ForceDisconnectedReselectionMessage => {
                &self.force_disconnected_reselection_message
            }
            PromptField::PromptForDisconnectedMessage => &self.prompt_for_disconnected_message,
            PromptField::ForceCancelledReselectionMessage => {
                &self.force_cancelled_reselection_message
            }
            PromptField::PromptForCancelledMessage => &self.prompt_for_cancelled_message,
        }
    }

    pub fn get_mut(&mut self, field: PromptField) -> &mut String {
        match field {
            PromptField::OkOption => &mut self.ok_option,
            PromptField::YesOption => &mut self.yes_option,
            PromptField::NoOption => &mut self.no_option,
            PromptField::DeviceOptionalTitle => &mut self.device_optional_title,
            PromptField::DeviceRequiredTitle => &mut self.device_required_title,
            PromptField::ForceDisconnectedReselectionMessage => {
                &mut self.force_disconnected_reselection_message
            }
            PromptField::PromptForDisconnectedMessage => &mut self.prompt_for_disconnected_message,
            PromptField::ForceCancelledReselectionMessage => {
                &mut self.force_cancelled_reselection_message
            }
            PromptField::PromptForCancelledMessage => &mut self.prompt_for_cancelled_message,
        }
    }

    /// Whether every field holds its English default.
    pub fn is_default(&self) -> bool {
        PromptField::ALL
            .iter()
            .all(|field| self.get(*field) == field.default_text())
    }
}

impl Default for SaveDeviceStrings {
    fn default() -> Self {
        Self::defaults()
    }
}

/// A save device's prompt strings.
///
/// Each field write takes the lock on its own; a sequence of writes is not
/// atomic, so hosts serialize calls that rewrite several fields.
#[derive(Debug, Default)]
pub struct SaveDevice {
    strings: RwLock<SaveDeviceStrings>,
}

/// The process-wide save device (initialized lazily with the defaults)
static SAVE_DEVICE: OnceLock<SaveDevice> = OnceLock::new();

impl SaveDevice {
    /// A device holding the English defaults.
    pub fn new() -> Self {
        Self::with_strings(SaveDeviceStrings::defaults())
    }

    pub fn with_strings(strings: SaveDeviceStrings) -> Self {
        Self {
            strings: RwLock::new(strings),
        }
    }

    /// Get the global save device instance.
    pub fn global() -> &'static SaveDevice {
        SAVE_DEVICE.get_or_init(SaveDevice::new)
    }

    // A panic while holding the lock leaves plain strings behind, which are
    // still valid to read and overwrite.
    fn read(&self) -> RwLockReadGuard<'_, SaveDeviceStrings> {
        self.strings.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SaveDeviceStrings> {
        self.strings.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Current text of one field.
    pub fn prompt(&self, field: PromptField) -> String {
        self.read().get(field).to_string()
    }

    /// Copy of every field.
    pub fn snapshot(&self) -> SaveDeviceStrings {
        self.read().clone()
    }

    /// Replace every field at once.
    pub fn replace(&self, strings: SaveDeviceStrings) {
        *self.write() = strings;
    }
}

impl PromptSurface for SaveDevice {
    fn write_prompt(&self, field: PromptField, text: &str) {
        let mut strings = self.write();
        let slot = strings.get_mut(field);
        slot.clear();
        slot.push_str(text);
    }
}
