//! Packet writer over a caller-owned byte slice.

use crate::BufferError;

/// A checked writer that fills a caller-owned packet buffer in place.
///
/// Unlike a growable writer the capacity is fixed by the slice: a write that
/// does not fit fails with [`BufferError::Overflow`] and writes nothing.
///
/// # Example
///
/// ```
/// use nbt_buffers::Writer;
///
/// let mut packet = [0u8; 3];
/// let mut writer = Writer::at(&mut packet, 1);
/// writer.u16(0xc00c).unwrap();
/// assert!(writer.u8(0).is_err());
/// assert_eq!(packet, [0x00, 0xc0, 0x0c]);
/// ```
#[derive(Debug)]
pub struct Writer<'a> {
    /// The whole packet.
    pub uint8: &'a mut [u8],
    /// Current cursor position, relative to the start of the packet.
    pub x: usize,
    start: usize,
}

impl<'a> Writer<'a> {
    /// Creates a writer positioned at the start of the packet.
    pub fn new(uint8: &'a mut [u8]) -> Self {
        Self::at(uint8, 0)
    }

    /// Creates a writer positioned at `x`.
    pub fn at(uint8: &'a mut [u8], x: usize) -> Self {
        Self { uint8, x, start: x }
    }

    /// Returns the number of bytes that still fit after the cursor.
    pub fn size(&self) -> usize {
        self.uint8.len().saturating_sub(self.x)
    }

    /// Returns the number of bytes written since the writer was created.
    pub fn written(&self) -> usize {
        self.x - self.start
    }

    fn ensure_capacity(&self, n: usize) -> Result<(), BufferError> {
        if self.size() < n {
            return Err(BufferError::Overflow);
        }
        Ok(())
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.ensure_capacity(1)?;
        self.uint8[self.x] = val;
        self.x += 1;
        Ok(())
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) -> Result<(), BufferError> {
        self.buf(&val.to_be_bytes())
    }

    /// Copies `data` into the packet.
    pub fn buf(&mut self, data: &[u8]) -> Result<(), BufferError> {
        self.ensure_capacity(data.len())?;
        let end = self.x + data.len();
        self.uint8[self.x..end].copy_from_slice(data);
        self.x = end;
        Ok(())
    }
}
