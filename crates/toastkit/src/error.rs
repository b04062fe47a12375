//! Error types for the toast system.

use std::fmt;

use crate::host::HostId;

/// Errors that can occur while creating toasts or configuring defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastError {
    /// No host was given and no screen is presented to fall back to.
    NoAttachmentPoint,

    /// The host is not registered with the controller.
    UnknownHost(HostId),

    /// Process-wide default options were already installed.
    DefaultsAlreadyInstalled,
}

impl fmt::Display for ToastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastError::NoAttachmentPoint => {
                write!(f, "No host view given and no screen is presented")
            }
            ToastError::UnknownHost(id) => {
                write!(f, "Host {} is not registered", id.0)
            }
            ToastError::DefaultsAlreadyInstalled => {
                write!(f, "Default toast options were already installed")
            }
        }
    }
}

impl std::error::Error for ToastError {}

/// Result type alias for toast operations.
pub type ToastResult<T> = Result<T, ToastError>;
