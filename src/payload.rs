//! Payload Codec - WorkspaceState to Compact Bytes
//!
//! Wire layout: one version byte, then a gzip stream of the three fields in
//! fixed order (templateMarkdown, modelCto, data), each as a u32 big-endian
//! byte-length prefix followed by UTF-8 bytes. Length prefixes make any text
//! content representable - embedded newlines, braces, control characters and
//! delimiter-lookalikes cannot corrupt the structure.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::DecodeError;
use crate::workspace::WorkspaceState;
use crate::{CODEC_VERSION, MAX_DECOMPRESSED_LEN};

const LEN_PREFIX: usize = 4;

/// Serialize a workspace into versioned, compressed bytes.
///
/// Never fails: every WorkspaceState is representable, and gzip into an
/// in-memory buffer cannot hit an I/O error.
pub fn serialize(state: &WorkspaceState) -> Vec<u8> {
    let mut body = Vec::new();
    for field in state.fields() {
        body.extend_from_slice(&(field.len() as u32).to_be_bytes());
        body.extend_from_slice(field.as_bytes());
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&body)
        .expect("gzip into Vec cannot fail");
    let compressed = encoder.finish().expect("gzip into Vec cannot fail");

    let mut out = Vec::with_capacity(1 + compressed.len());
    out.push(CODEC_VERSION);
    out.extend_from_slice(&compressed);
    out
}

/// Reconstruct a workspace from serialized bytes.
///
/// The version tag is checked before decompression so that a token from an
/// unknown codec version fails fast instead of decompressing garbage into a
/// plausible-looking workspace.
pub fn deserialize(bytes: &[u8]) -> Result<WorkspaceState, DecodeError> {
    let (&version, compressed) = bytes
        .split_first()
        .ok_or_else(|| DecodeError::malformed("empty payload"))?;
    if version != CODEC_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: version,
            supported: CODEC_VERSION,
        });
    }

    let raw = decompress_bounded(compressed)?;
    parse_fields(&raw)
}

/// Decompress with a hard output bound. A stream that inflates past
/// `MAX_DECOMPRESSED_LEN` is rejected rather than exhausting memory.
fn decompress_bounded(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut raw = Vec::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = decoder
            .read(&mut buffer)
            .map_err(|e| DecodeError::malformed(format!("decompression failed: {}", e)))?;
        if n == 0 {
            break;
        }
        if raw.len() + n > MAX_DECOMPRESSED_LEN {
            return Err(DecodeError::malformed("decompressed payload exceeds size limit"));
        }
        raw.extend_from_slice(&buffer[..n]);
    }

    Ok(raw)
}

fn parse_fields(raw: &[u8]) -> Result<WorkspaceState, DecodeError> {
    let mut fields: [String; 3] = Default::default();
    let mut cursor = 0usize;

    for slot in &mut fields {
        if raw.len() - cursor < LEN_PREFIX {
            return Err(DecodeError::malformed("truncated length prefix"));
        }
        let len = u32::from_be_bytes(
            raw[cursor..cursor + LEN_PREFIX].try_into().expect("slice is 4 bytes"),
        ) as usize;
        cursor += LEN_PREFIX;

        if raw.len() - cursor < len {
            return Err(DecodeError::malformed("field shorter than its length prefix"));
        }
        let text = std::str::from_utf8(&raw[cursor..cursor + len])
            .map_err(|e| DecodeError::malformed(format!("field is not valid UTF-8: {}", e)))?;
        *slot = text.to_string();
        cursor += len;
    }

    if cursor != raw.len() {
        return Err(DecodeError::malformed("trailing bytes after last field"));
    }

    Ok(WorkspaceState::from_fields(fields))
}
