//! NetBIOS name codec error type.

use nbt_buffers::BufferError;
use thiserror::Error;

/// Error type for decomposing, packing and unpacking NetBIOS names.
///
/// Every error is terminal for the call that produced it. Offsets are
/// absolute positions in the packet buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("NetBIOS name [{name}] too long: {len} bytes, must be <= 15")]
    NameTooLong { name: String, len: usize },

    #[error("character {ch:?} in [{text}] is outside Latin-1 and has no single-byte form")]
    NotLatin1 { text: String, ch: char },

    #[error("label [{label}] too long: {len} bytes, must be <= 63")]
    LabelTooLong { label: String, len: usize },

    #[error("name [{name}] contains an empty label")]
    EmptyLabel { name: String },

    #[error(
        "buffer not large enough to write name [{name}] at offset {offset}: \
         need {needed} bytes, {available} available"
    )]
    BufferTooSmall {
        name: String,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("label of {len} bytes at offset {offset} does not fit in remaining packet bytes")]
    LabelTooLarge { offset: usize, len: usize },

    #[error("packet ends inside the name at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error(
        "label length octet at offset {offset} has top 2 bits {flags:#04x}; \
         expected 0xc0 or 0x00"
    )]
    InvalidLabelFlags { offset: usize, flags: u8 },

    #[error("label pointer at offset {offset} revisits offset {target}")]
    PointerLoop { offset: usize, target: usize },

    #[error("label pointer at offset {offset} exceeds the limit of {limit} pointers per name")]
    TooManyPointers { offset: usize, limit: usize },

    #[error("encoded NetBIOS name [{encoded}] is not 32 characters in 'A'..='P'")]
    InvalidEncodedName { encoded: String },

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

pub type Result<T, E = NameError> = core::result::Result<T, E>;
