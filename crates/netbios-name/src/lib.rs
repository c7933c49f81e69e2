//! NetBIOS name codec for NetBIOS over TCP/IP packets (RFC 1001/1002).
//!
//! A NetBIOS name on the wire is the first label of a dotted name, padded to
//! 15 bytes, followed by a one-byte suffix, with each of the 16 bytes spread
//! over two characters `'A'..='P'`. Any further labels form the scope ID.
//! The whole sequence is written as DNS labels (RFC 883), so repeated tails
//! inside one packet can be replaced by two-byte pointers.
//!
//! # Overview
//!
//! - [`decompose`] - split a dotted name into padded short name and scope
//! - [`pack`] - encode and write a name, optionally sharing a [`NameMap`]
//! - [`unpack`] - read and decode a name, following label pointers
//! - [`NetbiosName`] - a checked name that can be read or written
//!
//! Names are handled one byte per character: characters U+0000..=U+00FF
//! map to the byte with the same value, and every byte read decodes.
//!
//! The codec logs through `tracing` at `trace` and `debug` level and never
//! installs a subscriber itself.

mod constants;
mod decompose;
mod error;
mod latin1;
mod name;
mod name_map;
mod pack;
mod unpack;

pub mod suffix;

pub use constants::{
    DEFAULT_MAX_POINTER_HOPS, ENCODED_NAME_LEN, MAX_LABEL_LEN, MAX_POINTER_OFFSET,
    NETBIOS_NAME_LEN, RAW_NAME_LEN,
};
pub use decompose::{decompose, DecomposedName};
pub use error::{NameError, Result};
pub use name::{encoded_len, NetbiosName};
pub use name_map::NameMap;
pub use pack::{compress_name, encode_name, pack};
pub use unpack::{decode_name, decompress_name, unpack, unpack_with, UnpackOptions, UnpackedName};
