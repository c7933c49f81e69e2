//! Wire-format constants for NetBIOS names (RFC 1001 §14.1, RFC 883 §3.3).

/// Width of the space-padded NetBIOS short name.
pub const NETBIOS_NAME_LEN: usize = 15;

/// Width of the raw name: the padded short name plus the suffix byte.
pub const RAW_NAME_LEN: usize = NETBIOS_NAME_LEN + 1;

/// Width of the half-ASCII encoded raw name (two characters per byte).
pub const ENCODED_NAME_LEN: usize = RAW_NAME_LEN * 2;

/// Longest label a 6-bit length field can describe.
pub const MAX_LABEL_LEN: usize = 0x3f;

/// Character used to pad the short name.
pub const PAD_BYTE: u8 = b' ';

/// Separator between the NetBIOS name and scope labels.
pub const LABEL_SEPARATOR: char = '.';

/// First character of the half-ASCII alphabet (nibble 0).
pub const NIBBLE_BASE: u8 = b'A';

/// Last character of the half-ASCII alphabet (nibble 15).
pub const NIBBLE_LAST: u8 = b'P';

/// Top two bits of a length octet.
pub const LABEL_FLAGS_MASK: u8 = 0xc0;

/// Flag bits of a plain length octet.
pub const LENGTH_FLAGS: u8 = 0x00;

/// Flag bits of the first byte of a label pointer.
pub const POINTER_FLAGS: u8 = 0xc0;

/// Low six bits of a length octet.
pub const LENGTH_MASK: u8 = 0x3f;

/// Pointer flags as they appear in the 16-bit pointer word.
pub const POINTER_WORD_FLAGS: u16 = 0xc000;

/// Low fourteen bits of a pointer word.
pub const POINTER_MASK: u16 = 0x3fff;

/// Highest packet offset a pointer can address.
pub const MAX_POINTER_OFFSET: usize = POINTER_MASK as usize;

/// Size of a label pointer on the wire.
pub const POINTER_LEN: usize = 2;

/// Pointers followed before decompression gives up.
pub const DEFAULT_MAX_POINTER_HOPS: usize = 16;
