//! Bounds-checked packet buffer primitives for NetBIOS over TCP/IP.
//!
//! Packets are parsed and built in place: a [`Reader`] walks a borrowed
//! `&[u8]` and a [`Writer`] fills a borrowed `&mut [u8]`, both starting at a
//! caller-chosen offset. Every access is checked and reports a
//! [`BufferError`] instead of panicking, since packet bytes come off the
//! network.
//!
//! # Example
//!
//! ```
//! use nbt_buffers::{Reader, Writer};
//!
//! let mut packet = [0u8; 8];
//! let mut writer = Writer::at(&mut packet, 2);
//! writer.u8(0x01).unwrap();
//! writer.u16(0x0203).unwrap();
//! writer.buf(b"hi").unwrap();
//! assert_eq!(writer.written(), 5);
//!
//! let mut reader = Reader::at(&packet, 2);
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.u16(), Ok(0x0203));
//! assert_eq!(reader.ascii(2).unwrap(), "hi");
//! ```

mod print_octets;
mod reader;
mod writer;

pub use print_octets::print_octets;
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Attempted to write past the end of the buffer.
    Overflow,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::Overflow => write!(f, "buffer overflow"),
        }
    }
}

impl std::error::Error for BufferError {}
