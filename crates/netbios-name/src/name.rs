//! The NetBIOS name entity.

use std::fmt;

use crate::constants::ENCODED_NAME_LEN;
use crate::decompose::decompose;
use crate::error::Result;
use crate::name_map::NameMap;
use crate::pack::pack;
use crate::unpack::{unpack_with, UnpackOptions};

/// A NetBIOS name with its suffix byte and optional scope.
///
/// Built either from text or from a packet. Either way the name has been
/// checked by [`decompose`], so every `NetbiosName` can be written.
///
/// # Example
///
/// ```
/// use netbios_name::{NameMap, NetbiosName};
///
/// let name = NetbiosName::new("FOOBAR.example.com", 0x20).unwrap();
/// assert_eq!(name.netbios_name(), "FOOBAR         ");
/// assert_eq!(name.scope_id(), "example.com");
/// assert_eq!(name.to_string(), "FOOBAR<20>.example.com");
///
/// let mut packet = [0u8; 64];
/// let mut map = NameMap::new();
/// let written = name.write(&mut packet, 0, Some(&mut map)).unwrap();
///
/// let read = NetbiosName::from_buffer(&packet, 0).unwrap();
/// assert_eq!(read.full_name(), "FOOBAR.example.com");
/// assert_eq!(read.bytes_read(), Some(written));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetbiosName {
    full_name: String,
    suffix: u8,
    netbios_name: String,
    scope_id: String,
    bytes_read: Option<usize>,
}

impl NetbiosName {
    /// Creates a name from its dotted text form and suffix byte.
    pub fn new(full_name: impl Into<String>, suffix: u8) -> Result<Self> {
        let full_name = full_name.into();
        let parts = decompose(&full_name)?;
        Ok(Self {
            full_name,
            suffix,
            netbios_name: parts.netbios_name,
            scope_id: parts.scope_id,
            bytes_read: None,
        })
    }

    /// Reads a name from the packet in `buf` at `offset`.
    pub fn from_buffer(buf: &[u8], offset: usize) -> Result<Self> {
        Self::from_buffer_with(buf, offset, &UnpackOptions::default())
    }

    /// Reads a name from the packet in `buf` at `offset`, following at most
    /// `options.max_pointer_hops` label pointers.
    pub fn from_buffer_with(buf: &[u8], offset: usize, options: &UnpackOptions) -> Result<Self> {
        let unpacked = unpack_with(buf, offset, options)?;
        let mut name = Self::new(unpacked.name, unpacked.suffix)?;
        name.bytes_read = Some(unpacked.bytes_read);
        Ok(name)
    }

    /// The name as given or read: short name plus `.scope` if present.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The type byte stored after the short name.
    pub fn suffix(&self) -> u8 {
        self.suffix
    }

    /// The short name, space-padded to 15 characters.
    pub fn netbios_name(&self) -> &str {
        &self.netbios_name
    }

    /// The labels after the first dot, or empty.
    pub fn scope_id(&self) -> &str {
        &self.scope_id
    }

    /// Bytes the name occupied in the packet it was read from, or `None`
    /// when it was built from text.
    pub fn bytes_read(&self) -> Option<usize> {
        self.bytes_read
    }

    /// Bytes [`NetbiosName::write`] needs when no label can be compressed.
    pub fn encoded_len(&self) -> usize {
        let scope = if self.scope_id.is_empty() {
            0
        } else {
            self.scope_id.chars().count() + 1
        };
        // length octet + 32 encoded bytes + scope labels + terminator
        1 + ENCODED_NAME_LEN + scope + 1
    }

    /// Writes the name into `buf` at `offset`, returning the bytes written.
    ///
    /// See [`pack`] for how `name_map` is used.
    pub fn write(
        &self,
        buf: &mut [u8],
        offset: usize,
        name_map: Option<&mut NameMap>,
    ) -> Result<usize> {
        pack(buf, offset, name_map, &self.full_name, self.suffix)
    }
}

impl fmt::Display for NetbiosName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{:02X}>", self.netbios_name.trim_end_matches(' '), self.suffix)?;
        if !self.scope_id.is_empty() {
            write!(f, ".{}", self.scope_id)?;
        }
        Ok(())
    }
}

/// Bytes [`pack`] writes for `full_name` without a name map.
///
/// ```
/// use netbios_name::encoded_len;
///
/// assert_eq!(encoded_len("foobar").unwrap(), 34);
/// assert_eq!(encoded_len("foobar.example.com").unwrap(), 46);
/// ```
pub fn encoded_len(full_name: &str) -> Result<usize> {
    Ok(NetbiosName::new(full_name, 0)?.encoded_len())
}
