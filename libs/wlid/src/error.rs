//! Error types for WLID decoding and validation.

use thiserror::Error;

/// Errors that can occur when decoding or validating a WLID.
///
/// Both variants describe a malformed identifier; [`WlidError::reason`]
/// distinguishes the point at which decoding gave up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WlidError {
    /// The input contains a whitespace character.
    #[error("wlid {input} invalid. whitespace found")]
    WhitespaceFound { input: String },

    /// The input does not split into a recognized segment layout.
    ///
    /// Carries the segments as they stood when decoding stopped.
    #[error("invalid WLID format: got {} segment(s), expected 4", .segments.len())]
    InvalidFormat { segments: Vec<String> },
}

impl WlidError {
    /// Stable reason string for this error.
    pub fn reason(&self) -> &'static str {
        match self {
            WlidError::WhitespaceFound { .. } => "whitespace found",
            WlidError::InvalidFormat { .. } => "invalid format",
        }
    }

    /// Returns the partially split segments, if decoding got that far.
    pub fn segments(&self) -> &[String] {
        match self {
            WlidError::WhitespaceFound { .. } => &[],
            WlidError::InvalidFormat { segments } => segments,
        }
    }

    /// Returns true if this error was raised by the whitespace check.
    pub fn is_whitespace_error(&self) -> bool {
        matches!(self, WlidError::WhitespaceFound { .. })
    }

    /// Returns true if this error indicates a segment layout mismatch.
    pub fn is_format_error(&self) -> bool {
        matches!(self, WlidError::InvalidFormat { .. })
    }
}
