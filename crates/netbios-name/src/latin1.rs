//! One-byte-per-character text model shared by the encoder and decoder.
//!
//! Name and scope characters map to wire bytes by code point, so only
//! U+0000..=U+00FF can be written. Wire bytes always decode.

use tracing::debug;

use crate::error::{NameError, Result};

/// Returns the wire bytes of `text`, one per character.
pub(crate) fn to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| {
            u8::try_from(ch).map_err(|_| {
                debug!(text, ch = %ch, "character outside Latin-1");
                NameError::NotLatin1 {
                    text: text.to_owned(),
                    ch,
                }
            })
        })
        .collect()
}

/// Returns the text of wire `bytes`, one character per byte.
pub(crate) fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
