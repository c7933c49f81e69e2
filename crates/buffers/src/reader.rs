//! Packet reader with cursor tracking.

use crate::BufferError;

/// A checked reader over a packet held in a byte slice.
///
/// The cursor may be moved anywhere in the packet with [`Reader::seek`],
/// which is how label pointers are followed. Reads past the end return
/// [`BufferError::EndOfBuffer`] and leave the cursor where it was.
///
/// # Example
///
/// ```
/// use nbt_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), Ok(0x01));
/// assert_eq!(reader.u16(), Ok(0x0203));
/// assert!(reader.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The whole packet.
    pub uint8: &'a [u8],
    /// Current cursor position, relative to the start of the packet.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of the packet.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Creates a reader positioned at `x`.
    ///
    /// The position is not validated here; the first read reports it.
    pub fn at(uint8: &'a [u8], x: usize) -> Self {
        Self { uint8, x }
    }

    /// Returns the number of bytes left between the cursor and the end.
    pub fn size(&self) -> usize {
        self.uint8.len().saturating_sub(self.x)
    }

    /// Moves the cursor to an absolute position in the packet.
    pub fn seek(&mut self, x: usize) {
        self.x = x;
    }

    fn assert_size(&self, n: usize) -> Result<(), BufferError> {
        if self.size() < n {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.assert_size(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        self.assert_size(2)?;
        let x = self.x;
        let val = u16::from_be_bytes([self.uint8[x], self.uint8[x + 1]]);
        self.x += 2;
        Ok(val)
    }

    /// Returns the next `size` bytes and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.assert_size(size)?;
        let x = self.x;
        self.x += size;
        Ok(&self.uint8[x..self.x])
    }

    /// Reads `length` bytes as single-byte characters.
    ///
    /// Each byte becomes the `char` with the same code point, so ASCII comes
    /// back unchanged and no byte sequence is rejected.
    pub fn ascii(&mut self, length: usize) -> Result<String, BufferError> {
        Ok(self.buf(length)?.iter().map(|&b| char::from(b)).collect())
    }
}
