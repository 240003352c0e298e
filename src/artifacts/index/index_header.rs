use crate::artifacts::index::byte_cursor::ByteCursor;
use crate::artifacts::index::error::{IndexError, Result};
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE};
use byteorder::{ByteOrder, NetworkEndian};
use bytes::Bytes;
use derive_new::new;

/// Fixed 12-byte header at the start of every index file
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub signature: u32,
    pub version: u32,
    pub entries_count: u32,
}

impl IndexHeader {
    pub fn decode(buffer: &Bytes) -> Result<Self> {
        if buffer.len() < HEADER_SIZE {
            return Err(IndexError::Truncated {
                offset: 0,
                needed: HEADER_SIZE,
                available: buffer.len(),
            });
        }

        let cursor = ByteCursor::new(buffer);
        let signature = cursor.read_u32_be(0)?;
        if signature != SIGNATURE {
            return Err(IndexError::InvalidSignature(signature));
        }

        Ok(IndexHeader {
            signature,
            version: cursor.read_u32_be(4)?,
            entries_count: cursor.read_u32_be(8)?,
        })
    }

    /// The three header fields in their on-disk form.
    pub fn to_bytes(&self) -> Bytes {
        let mut bytes = [0u8; HEADER_SIZE];
        NetworkEndian::write_u32(&mut bytes[0..4], self.signature);
        NetworkEndian::write_u32(&mut bytes[4..8], self.version);
        NetworkEndian::write_u32(&mut bytes[8..12], self.entries_count);

        Bytes::copy_from_slice(&bytes)
    }
}
