//! Reading NetBIOS names out of a packet buffer.
//!
//! [`decompress_name`] follows the RFC 883 label format, including pointers,
//! to recover the dotted label sequence. [`decode_name`] then reverses the
//! RFC 1001 half-ASCII encoding of its first label.

use nbt_buffers::{print_octets, BufferError, Reader};
use tracing::{debug, trace};

use crate::constants::{
    DEFAULT_MAX_POINTER_HOPS, ENCODED_NAME_LEN, LABEL_FLAGS_MASK, LABEL_SEPARATOR, LENGTH_FLAGS,
    LENGTH_MASK, NETBIOS_NAME_LEN, NIBBLE_BASE, NIBBLE_LAST, PAD_BYTE, POINTER_FLAGS,
    POINTER_MASK,
};
use crate::error::{NameError, Result};
use crate::latin1;

/// Options for [`unpack_with`] and [`decompress_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackOptions {
    /// Label pointers followed for one name before giving up.
    pub max_pointer_hops: usize,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self {
            max_pointer_hops: DEFAULT_MAX_POINTER_HOPS,
        }
    }
}

/// A name read from a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackedName {
    /// Bytes the name occupies at the read offset. Bytes reached through a
    /// pointer are not counted.
    pub bytes_read: usize,
    /// The NetBIOS name without padding, followed by `.scope` if present.
    pub name: String,
    /// The type byte stored after the 15 name bytes.
    pub suffix: u8,
}

/// Reads the name at `offset` with default options.
///
/// The buffer must start at the start of the packet, since pointers are
/// offsets from there.
///
/// # Example
///
/// ```
/// use netbios_name::{pack, unpack};
///
/// let mut packet = [0u8; 64];
/// let written = pack(&mut packet, 0, None, "foobar.example.com", 0x20).unwrap();
///
/// let name = unpack(&packet, 0).unwrap();
/// assert_eq!(name.name, "foobar.example.com");
/// assert_eq!(name.suffix, 0x20);
/// assert_eq!(name.bytes_read, written);
/// ```
pub fn unpack(buf: &[u8], offset: usize) -> Result<UnpackedName> {
    unpack_with(buf, offset, &UnpackOptions::default())
}

/// Reads the name at `offset`.
pub fn unpack_with(buf: &[u8], offset: usize, options: &UnpackOptions) -> Result<UnpackedName> {
    let (bytes_read, labels) = decompress_name(buf, offset, options)?;
    let (name, suffix) = decode_name(&labels)?;
    trace!(
        offset,
        bytes_read,
        name = %name,
        suffix,
        bytes = %print_octets(&buf[offset..offset + bytes_read], 48),
        "unpacked NetBIOS name"
    );
    Ok(UnpackedName {
        bytes_read,
        name,
        suffix,
    })
}

/// Reads the label sequence at `offset`, joining labels with dots.
///
/// Returns the number of bytes the name occupies at `offset` together with
/// the joined labels. A pointer ends the name at the read offset; reading
/// continues at its target, which may hold further labels and pointers.
/// Revisiting a pointer target is an error, as is following more than
/// `options.max_pointer_hops` pointers.
pub fn decompress_name(
    buf: &[u8],
    offset: usize,
    options: &UnpackOptions,
) -> Result<(usize, String)> {
    let mut reader = Reader::at(buf, offset);
    let mut name = String::new();
    let mut bytes_read = None;
    let mut visited: Vec<usize> = Vec::new();

    loop {
        let at = reader.x;
        let octet = reader.u8().map_err(|err| end_at(err, at))?;

        match octet & LABEL_FLAGS_MASK {
            LENGTH_FLAGS => {
                let len = usize::from(octet & LENGTH_MASK);
                if len == 0 {
                    break;
                }
                if reader.size() < len {
                    debug!(offset = at, len, available = reader.size(), "label overruns packet");
                    return Err(NameError::LabelTooLarge { offset: at, len });
                }
                let label = reader.ascii(len)?;
                trace!(offset = at, label = %label, "read label");
                if !name.is_empty() {
                    name.push(LABEL_SEPARATOR);
                }
                name.push_str(&label);
            }
            POINTER_FLAGS => {
                let low = reader.u8().map_err(|err| end_at(err, at + 1))?;
                let target = usize::from(u16::from_be_bytes([octet, low]) & POINTER_MASK);
                bytes_read.get_or_insert(reader.x - offset);

                if visited.contains(&target) {
                    debug!(offset = at, target, "label pointer loop");
                    return Err(NameError::PointerLoop { offset: at, target });
                }
                if visited.len() >= options.max_pointer_hops {
                    let limit = options.max_pointer_hops;
                    debug!(offset = at, limit, "too many label pointers");
                    return Err(NameError::TooManyPointers {
                        offset: at,
                        limit: options.max_pointer_hops,
                    });
                }
                visited.push(target);
                trace!(offset = at, target, "following label pointer");
                reader.seek(target);
            }
            flags => {
                debug!(offset = at, flags, "invalid label flags");
                return Err(NameError::InvalidLabelFlags { offset: at, flags });
            }
        }
    }

    let bytes_read = bytes_read.unwrap_or(reader.x - offset);
    Ok((bytes_read, name))
}

fn end_at(err: BufferError, offset: usize) -> NameError {
    match err {
        BufferError::EndOfBuffer => NameError::UnexpectedEnd { offset },
        other => other.into(),
    }
}

/// Reverses the half-ASCII encoding of the first label of `labels`.
///
/// Each decoded byte becomes the character with the same code point.
/// Returns the NetBIOS name with trailing spaces removed, followed by the
/// untouched scope (with its leading dot) when there is one, and the suffix
/// byte.
///
/// # Example
///
/// ```
/// use netbios_name::decode_name;
///
/// let (name, suffix) = decode_name("EBCACACACACACACACACACACACACACACA.scope").unwrap();
/// assert_eq!(name, "A.scope");
/// assert_eq!(suffix, 0x20);
/// ```
pub fn decode_name(labels: &str) -> Result<(String, u8)> {
    let (encoded, scope) = match labels.find(LABEL_SEPARATOR) {
        Some(index) => labels.split_at(index),
        None => (labels, ""),
    };

    let bytes = encoded.as_bytes();
    if bytes.len() != ENCODED_NAME_LEN
        || !bytes.iter().all(|c| (NIBBLE_BASE..=NIBBLE_LAST).contains(c))
    {
        debug!(encoded, "invalid encoded NetBIOS name");
        return Err(NameError::InvalidEncodedName {
            encoded: encoded.to_owned(),
        });
    }

    let mut raw = bytes
        .chunks_exact(2)
        .map(|pair| ((pair[0] - NIBBLE_BASE) << 4) | (pair[1] - NIBBLE_BASE));
    let mut decoded: Vec<u8> = raw.by_ref().take(NETBIOS_NAME_LEN).collect();
    let suffix = raw.next().unwrap_or_default();

    while decoded.last() == Some(&PAD_BYTE) {
        decoded.pop();
    }

    let mut name = latin1::from_bytes(&decoded);
    name.push_str(scope);
    Ok((name, suffix))
}
