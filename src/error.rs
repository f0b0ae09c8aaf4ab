//! Decode Error Taxonomy
//!
//! Every way a token can fail to become a WorkspaceState, as one error
//! family with a discriminating kind. Encoding has no failure mode.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Token contains characters outside the URL-safe alphabet or has an
    /// impossible length for the transport encoding.
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    /// Payload carries a format tag this codec does not understand.
    /// Raised before any decompression is attempted.
    #[error("Unsupported codec version: {found} (supported: {supported})")]
    UnsupportedVersion { found: u8, supported: u8 },

    /// Decompression failed, the bytes were not valid UTF-8, or the field
    /// structure could not be parsed.
    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },
}

impl DecodeError {
    pub(crate) fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }
}
