//! Transport Encoder - Bytes to URL-Safe Tokens
//!
//! Content-agnostic: carries whatever bytes the payload codec produced and
//! never inspects them. The alphabet is base64url without padding, so a token
//! can be pasted into a URL query or fragment with no percent-encoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::DecodeError;

/// Encode bytes as a URL-safe token. Deterministic: no salt, no padding.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a token back into bytes. Characters outside the alphabet or an
/// impossible length fail with an invalid-token error.
pub fn decode(token: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| DecodeError::invalid_token(e.to_string()))
}
