//! Compression map shared by every name written into one packet.

use std::collections::HashMap;

use crate::constants::MAX_POINTER_OFFSET;

/// Offsets at which label sequences were first written into a packet.
///
/// Keys are label sequences as they appear before compression: the encoded
/// NetBIOS name followed by its scope, or any dotted tail of that. One map
/// belongs to one packet buffer; reusing it for another buffer produces
/// pointers into the wrong bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    offsets: HashMap<String, u16>,
}

impl NameMap {
    /// Creates an empty map for a new packet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the packet offset of an earlier copy of `labels`.
    pub fn get(&self, labels: &str) -> Option<u16> {
        self.offsets.get(labels).copied()
    }

    /// Records that `labels` starts at `offset`.
    ///
    /// The first offset recorded for a sequence is kept. Offsets beyond
    /// 0x3fff are skipped because a pointer cannot reach them. Returns
    /// whether the map changed.
    pub fn record(&mut self, labels: &str, offset: usize) -> bool {
        let Ok(offset) = u16::try_from(offset) else {
            return false;
        };
        if usize::from(offset) > MAX_POINTER_OFFSET || self.offsets.contains_key(labels) {
            return false;
        }
        self.offsets.insert(labels.to_owned(), offset);
        true
    }

    /// Number of recorded label sequences.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Forgets every offset, ready for a new packet.
    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}
