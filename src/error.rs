//! Error types for the settings API.

use std::fmt;
use thiserror::Error;

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// No value was provided at all
    Missing,
    /// A collection was provided but contained nothing
    Empty,
    /// A raw language value outside German..=English
    OutOfRange(i32),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "value is required"),
            InvalidReason::Empty => write!(f, "at least one language must be given"),
            InvalidReason::OutOfRange(value) => {
                write!(f, "{} is not a defined language", value)
            }
        }
    }
}

/// Errors raised by the settings controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: InvalidReason,
    },
}

impl SettingsError {
    pub(crate) fn invalid(argument: &'static str, reason: InvalidReason) -> Self {
        SettingsError::InvalidArgument { argument, reason }
    }

    /// The rejection reason carried by this error.
    pub fn reason(&self) -> InvalidReason {
        match self {
            SettingsError::InvalidArgument { reason, .. } => *reason,
        }
    }
}
