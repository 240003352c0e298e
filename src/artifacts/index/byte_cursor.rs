use crate::artifacts::index::error::{IndexError, Result};
use byteorder::{ByteOrder, NetworkEndian};
use bytes::Bytes;
use derive_new::new;

/// Bounds-checked big-endian reads over a shared buffer.
///
/// The cursor holds no position of its own; callers pass absolute offsets and
/// track their progress explicitly.
#[derive(Debug, Clone, new)]
pub struct ByteCursor<'b> {
    buffer: &'b Bytes,
}

impl<'b> ByteCursor<'b> {
    pub fn read_u32_be(&self, offset: usize) -> Result<u32> {
        let bytes = self.checked(offset, 4)?;
        Ok(NetworkEndian::read_u32(bytes))
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16> {
        let bytes = self.checked(offset, 2)?;
        Ok(NetworkEndian::read_u16(bytes))
    }

    /// Zero-copy slice of `len` bytes starting at `offset`.
    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<Bytes> {
        self.checked(offset, len)?;
        Ok(self.buffer.slice(offset..offset + len))
    }

    fn checked(&self, offset: usize, len: usize) -> Result<&'b [u8]> {
        let out_of_bounds = || IndexError::OutOfBounds {
            offset,
            len,
            available: self.buffer.len(),
        };

        let end = offset.checked_add(len).ok_or_else(out_of_bounds)?;
        self.buffer.get(offset..end).ok_or_else(out_of_bounds)
    }
}
