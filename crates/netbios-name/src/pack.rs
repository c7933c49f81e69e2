//! Writing NetBIOS names into a packet buffer.
//!
//! A name is written in two steps. [`encode_name`] applies the RFC 1001
//! half-ASCII encoding to the padded short name and its suffix byte, then
//! [`compress_name`] writes the result as RFC 883 labels, replacing any tail
//! already present in the packet with a pointer.

use nbt_buffers::{print_octets, Writer};
use tracing::{debug, trace};

use crate::constants::{
    ENCODED_NAME_LEN, LABEL_SEPARATOR, MAX_LABEL_LEN, NIBBLE_BASE, POINTER_LEN, POINTER_MASK,
    POINTER_WORD_FLAGS,
};
use crate::decompose::decompose;
use crate::error::{NameError, Result};
use crate::latin1;
use crate::name_map::NameMap;

/// Encodes and writes `full_name` with its `suffix` byte at `offset`.
///
/// When a `name_map` is supplied, label sequences already written into the
/// same packet are replaced by a pointer and new ones are recorded. Without
/// one, the name is written out in full.
///
/// Returns the number of bytes written. On error, bytes written before the
/// failure stay in the buffer and the map may hold entries for them; both
/// should be discarded.
///
/// # Example
///
/// ```
/// use netbios_name::{pack, NameMap};
///
/// let mut packet = [0u8; 64];
/// let mut map = NameMap::new();
/// assert_eq!(pack(&mut packet, 0, Some(&mut map), "foobar", 0x20), Ok(34));
/// assert_eq!(pack(&mut packet, 34, Some(&mut map), "foobar", 0x20), Ok(2));
/// assert_eq!(packet[34..36], [0xc0, 0x00]);
/// ```
pub fn pack(
    buf: &mut [u8],
    offset: usize,
    name_map: Option<&mut NameMap>,
    full_name: &str,
    suffix: u8,
) -> Result<usize> {
    let encoded = encode_name(full_name, suffix)?;
    let written = compress_name(buf, offset, name_map, &encoded)?;
    trace!(
        name = full_name,
        suffix,
        offset,
        written,
        bytes = %print_octets(&buf[offset..offset + written], 48),
        "packed NetBIOS name"
    );
    Ok(written)
}

/// Applies the half-ASCII encoding to the NetBIOS part of `full_name`.
///
/// Each byte of the padded name and the suffix is split into two nibbles,
/// and each nibble becomes the character `'A' + nibble`. Name characters
/// map to bytes by code point. The scope, if any, is appended unchanged
/// after a dot.
///
/// # Example
///
/// ```
/// use netbios_name::encode_name;
///
/// assert_eq!(
///     encode_name("A.scope", 0x20).unwrap(),
///     "EBCACACACACACACACACACACACACACACA.scope"
/// );
/// ```
pub fn encode_name(full_name: &str, suffix: u8) -> Result<String> {
    let parts = decompose(full_name)?;

    let raw = latin1::to_bytes(&parts.netbios_name)?
        .into_iter()
        .chain(std::iter::once(suffix));
    let mut encoded = String::with_capacity(ENCODED_NAME_LEN + 1 + parts.scope_id.len());
    for byte in raw {
        encoded.push(char::from(NIBBLE_BASE + (byte >> 4)));
        encoded.push(char::from(NIBBLE_BASE + (byte & 0x0f)));
    }

    if !parts.scope_id.is_empty() {
        encoded.push(LABEL_SEPARATOR);
        encoded.push_str(&parts.scope_id);
    }

    Ok(encoded)
}

/// Writes a dotted label sequence at `offset` using label compression.
///
/// For each remaining tail of `name`, a known tail is written as a two-byte
/// pointer and ends the name; an unknown tail is recorded in `name_map` and
/// its first label is written as a length octet followed by the label bytes,
/// one byte per character. A name written without a pointer ends with a zero
/// length octet.
pub fn compress_name(
    buf: &mut [u8],
    offset: usize,
    mut name_map: Option<&mut NameMap>,
    name: &str,
) -> Result<usize> {
    let mut writer = Writer::at(buf, offset);
    let mut remaining = name;

    loop {
        if let Some(target) = name_map.as_deref().and_then(|map| map.get(remaining)) {
            ensure_room(&writer, remaining, POINTER_LEN)?;
            writer.u16(POINTER_WORD_FLAGS | (target & POINTER_MASK))?;
            trace!(
                offset = writer.x - POINTER_LEN,
                target,
                labels = remaining,
                "wrote label pointer"
            );
            break;
        }

        if let Some(map) = name_map.as_deref_mut() {
            map.record(remaining, writer.x);
        }

        let (label, rest) = match remaining.split_once(LABEL_SEPARATOR) {
            Some((label, rest)) => (label, Some(rest)),
            None => (remaining, None),
        };

        let bytes = latin1::to_bytes(label)?;
        if bytes.len() > MAX_LABEL_LEN {
            debug!(label, len = bytes.len(), "label too long");
            return Err(NameError::LabelTooLong {
                label: label.to_owned(),
                len: bytes.len(),
            });
        }
        if label.is_empty() {
            debug!(name, "empty label");
            return Err(NameError::EmptyLabel {
                name: name.to_owned(),
            });
        }

        let terminator = usize::from(rest.is_none());
        ensure_room(&writer, remaining, 1 + bytes.len() + terminator)?;

        // The length fits in six bits, so the flag bits stay zero.
        writer.u8(bytes.len() as u8)?;
        writer.buf(&bytes)?;
        trace!(offset = writer.x - bytes.len() - 1, label, "wrote label");

        match rest {
            Some(rest) => remaining = rest,
            None => {
                writer.u8(0)?;
                break;
            }
        }
    }

    Ok(writer.written())
}

fn ensure_room(writer: &Writer<'_>, name: &str, needed: usize) -> Result<()> {
    let available = writer.size();
    if available < needed {
        debug!(name, offset = writer.x, needed, available, "buffer too small for name");
        return Err(NameError::BufferTooSmall {
            name: name.to_owned(),
            offset: writer.x,
            needed,
            available,
        });
    }
    Ok(())
}
