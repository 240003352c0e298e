//! Index entry representation
//!
//! Each entry describes one tracked file as it was when the index was last
//! written:
//! - File path
//! - Content hash (object ID)
//! - File metadata (mode, size, timestamps, inode)
//!
//! ## Entry Format
//!
//! ```text
//! offset  size  field
//!      0    40  ctime.sec ctime.nsec mtime.sec mtime.nsec dev ino mode uid gid size
//!     40  H      object ID (H = 20 for SHA-1, 32 for SHA-256)
//!   40+H     2  flags
//!   42+H     2  extended flags, only if flags & 0x4000
//!      .     N  name, N = flags & 0x0FFF
//!      .   1-8  NUL padding up to the next multiple of 8 from the entry start
//! ```

use crate::artifacts::index::byte_cursor::ByteCursor;
use crate::artifacts::index::entry_flags::{EntryFlags, ExtendedFlags, ExtendedFlagsPolicy};
use crate::artifacts::index::error::{IndexError, Result};
use crate::artifacts::index::hash_algorithm::HashAlgorithm;
use crate::artifacts::index::object_id::ObjectId;
use crate::artifacts::index::{ENTRY_BLOCK, ENTRY_METADATA_SIZE};
use bytes::Bytes;
use std::borrow::Cow;

/// One decoded index entry
///
/// `name` and `oid` are slices of the index buffer; the entry keeps that
/// buffer alive for as long as it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Path relative to the repository root, as raw bytes
    pub name: Bytes,
    /// Hash of the file content
    pub oid: ObjectId,
    pub metadata: EntryMetadata,
    pub flags: EntryFlags,
    /// Second flags word, if the entry has one
    pub extended_flags: Option<ExtendedFlags>,
    /// Offset of the entry from the start of the buffer
    pub offset: usize,
    /// On-disk length including padding
    pub disk_size: usize,
}

/// Stat data recorded for an entry
///
/// All fields are stored as 32-bit big-endian integers and are kept at that
/// width; larger values were truncated when the index was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryMetadata {
    /// Change time (seconds since Unix epoch)
    pub ctime: u32,
    pub ctime_nsec: u32,
    /// Modification time (seconds since Unix epoch)
    pub mtime: u32,
    pub mtime_nsec: u32,
    pub dev: u32,
    pub ino: u32,
    /// File type and permission bits
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub size: u32,
}

impl IndexEntry {
    /// Decode the entry starting at `offset`.
    ///
    /// Returns the entry together with the offset at which the next entry
    /// starts. The reported offset is always 8-byte aligned relative to
    /// `offset` and leaves at least one padding byte after the name.
    pub fn decode(
        buffer: &Bytes,
        offset: usize,
        hash: HashAlgorithm,
        policy: ExtendedFlagsPolicy,
    ) -> Result<(Self, usize)> {
        Self::decode_fields(buffer, offset, hash, policy).map_err(IndexError::into_truncated)
    }

    fn decode_fields(
        buffer: &Bytes,
        offset: usize,
        hash: HashAlgorithm,
        policy: ExtendedFlagsPolicy,
    ) -> Result<(Self, usize)> {
        let cursor = ByteCursor::new(buffer);

        let mut fields = [0u32; ENTRY_METADATA_SIZE / 4];
        for (i, field) in fields.iter_mut().enumerate() {
            *field = cursor.read_u32_be(offset + i * 4)?;
        }
        let [
            ctime,
            ctime_nsec,
            mtime,
            mtime_nsec,
            dev,
            ino,
            mode,
            uid,
            gid,
            size,
        ] = fields;

        let mut position = offset + ENTRY_METADATA_SIZE;
        let oid = ObjectId::from_raw(cursor.read_bytes(position, hash.size())?);
        position += hash.size();

        let flags = EntryFlags::from_word(cursor.read_u16_be(position)?);
        let extended_flags = if flags.is_extended() {
            if policy == ExtendedFlagsPolicy::Reject {
                return Err(IndexError::UnsupportedExtendedFlags { offset });
            }
            let word = cursor.read_u16_be(position + 2)?;
            Some(ExtendedFlags::from_bits_retain(word))
        } else {
            None
        };
        position += flags.on_disk_size();

        let name_len = flags.name_len();
        let name = cursor.read_bytes(position, name_len)?;

        let consumed = position - offset + name_len;
        let disk_size = (consumed + ENTRY_BLOCK) & !(ENTRY_BLOCK - 1);

        let entry = IndexEntry {
            name,
            oid,
            metadata: EntryMetadata {
                ctime,
                ctime_nsec,
                mtime,
                mtime_nsec,
                dev,
                ino,
                mode,
                uid,
                gid,
                size,
            },
            flags,
            extended_flags,
            offset,
            disk_size,
        };

        Ok((entry, offset + disk_size))
    }

    /// Path rendered as UTF-8, replacing invalid sequences.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}
