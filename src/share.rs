//! Share Link Composition - Single Entry Point
//!
//! Callers share a workspace through these two functions; the payload codec
//! and transport encoder stay swappable behind them.

use crate::error::DecodeError;
use crate::workspace::WorkspaceState;
use crate::{payload, transport};

/// Encode a workspace into the opaque token embedded in a share link.
pub fn encode_share_link(state: &WorkspaceState) -> String {
    transport::encode(&payload::serialize(state))
}

/// Decode a share-link token back into a workspace.
///
/// The token is the bare value extracted from the URL by the caller; this
/// core never parses URLs. Failure leaves no partial state - the caller
/// either gets a full WorkspaceState or a `DecodeError`.
pub fn decode_share_link(token: &str) -> Result<WorkspaceState, DecodeError> {
    payload::deserialize(&transport::decode(token)?)
}

/// Build a complete shareable URL: `{origin}?data={token}`.
///
/// The token needs no percent-encoding, so plain concatenation is safe.
pub fn share_url(origin: &str, state: &WorkspaceState) -> String {
    format!("{}?data={}", origin, encode_share_link(state))
}
