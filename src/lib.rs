//! Template Playground Core - Shareable Workspace Codec
//!
//! # The Contract (Non-Negotiable)
//! 1. Round-Trip Is Lossless: decode(encode(state)) == state
//! 2. Tokens Are Deterministic: equal states produce identical tokens
//! 3. Tokens Are URL-Safe: no character ever needs percent-encoding
//! 4. Decode Fails Loud: a bad token is a `DecodeError`, never a wrong state
//! 5. Versions Are Explicit: unknown formats are rejected before decompression

pub mod error;
pub mod payload;
pub mod share;
pub mod transport;
pub mod workspace;

pub use error::DecodeError;
pub use share::{decode_share_link, encode_share_link, share_url};
pub use workspace::WorkspaceState;

/// Format tag written as the first byte of every serialized payload.
pub const CODEC_VERSION: u8 = 1;

/// Upper bound on decompressed payload size (16 MiB).
///
/// A workspace is editor text measured in kilobytes; anything that inflates
/// past this bound is a corrupt or hostile token, not a real workspace.
pub const MAX_DECOMPRESSED_LEN: usize = 16 * 1024 * 1024;
