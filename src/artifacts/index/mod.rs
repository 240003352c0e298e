//! Git index file format
//!
//! The index (also called staging area or cache) stores a snapshot of the
//! metadata of every tracked file. This module decodes it without copying:
//! every decoded value is a view over one immutable [`bytes::Bytes`] buffer.
//!
//! ## File Format (Version 2/3)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "DIRC" (4 bytes)
//!   - Version (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length):
//!   - 10 x 32-bit metadata fields (ctime, mtime, dev, ino, mode, uid, gid, size)
//!   - Object ID (20 bytes for SHA-1, 32 bytes for SHA-256)
//!   - Flags (2 bytes), plus extended flags (2 bytes) when bit 0x4000 is set
//!   - Path name (flags & 0x0FFF bytes)
//!   - 1-8 NUL bytes, padding the entry to 8-byte alignment
//! ```
//!
//! Extensions and the trailing checksum are not decoded.

pub mod byte_cursor;
pub mod entries;
pub mod entry_flags;
pub mod error;
pub mod hash_algorithm;
pub mod index_entry;
pub mod index_header;
pub mod object_id;
pub mod record;


use crate::artifacts::index::entries::Entries;
use crate::artifacts::index::entry_flags::ExtendedFlagsPolicy;
use crate::artifacts::index::error::Result;
use crate::artifacts::index::hash_algorithm::HashAlgorithm;
use crate::artifacts::index::index_header::IndexHeader;
use bytes::Bytes;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12; // 4 bytes for signature, 4 for version, 4 for entries_count

/// Magic signature identifying index files ("DIRC")
pub const SIGNATURE: u32 = 0x4449_5243;

/// Size of the fixed metadata block at the start of each entry
pub const ENTRY_METADATA_SIZE: usize = 40; // 10 x u32

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Decode the header and return a lazy iterator over the entries that follow it.
///
/// The returned [`Entries`] holds its own handle to `buffer`, so the caller
/// may drop theirs.
pub fn read_index(
    buffer: &Bytes,
    hash: HashAlgorithm,
    policy: ExtendedFlagsPolicy,
) -> Result<(IndexHeader, Entries)> {
    let header = IndexHeader::decode(buffer)?;
    let entries = Entries::new(
        buffer.clone(),
        HEADER_SIZE,
        header.entries_count,
        hash,
        policy,
    );

    Ok((header, entries))
}
