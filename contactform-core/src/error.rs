//! Error types for contact form operations

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Why a single field failed validation
///
/// These are expected outcomes carried in a [`ValidationReport`](crate::ValidationReport),
/// never faults. The user recovers by correcting the input and submitting again.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Value is empty after trimming whitespace
    #[cfg_attr(feature = "std", error("value is required"))]
    Required,

    /// Value is present but does not have the expected shape
    #[cfg_attr(feature = "std", error("value has an invalid format"))]
    InvalidFormat,
}

/// Errors raised by the form lifecycle and its collaborators
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The form was already replaced by its confirmation
    #[cfg_attr(feature = "std", error("Form has already been submitted"))]
    AlreadySubmitted,

    /// The submission endpoint refused or failed the submission
    #[cfg_attr(feature = "std", error("Submission endpoint error: {0}"))]
    Endpoint(String),
}
