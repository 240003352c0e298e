//! Display records for decoded index data
//!
//! Each record is a thin `Display` wrapper around a decoded value, so the
//! commands decide where the text goes (stdout, pager, test buffer).

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use derive_new::new;
use std::fmt;

pub const HEADER_LEGEND: &str = "#header (1-signature, 2-version, 3-entries)";

pub const ENTRIES_LEGEND: &str =
    "#entries (1-mode, 2-uid, 3-gid, 4-flags, 5-ctime, 6-mtime, 7-inode, 8-oid, 9-size, 10-name)";

/// `0x44495243 2 17`
#[derive(new)]
pub struct HeaderRecord<'h> {
    header: &'h IndexHeader,
}

impl fmt::Display for HeaderRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#010x} {} {}",
            self.header.signature, self.header.version, self.header.entries_count
        )
    }
}

/// `signature=0x44495243 version=2 entries=17`
///
/// Only the signature is hexadecimal; version and count are decimal.
#[derive(new)]
pub struct HeaderSummary<'h> {
    header: &'h IndexHeader,
}

impl fmt::Display for HeaderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "signature={:#x} version={} entries={}",
            self.header.signature, self.header.version, self.header.entries_count
        )
    }
}

/// One line per entry, in the column order of [`ENTRIES_LEGEND`]
#[derive(new)]
pub struct EntryRecord<'e> {
    entry: &'e IndexEntry,
}

impl fmt::Display for EntryRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata = &self.entry.metadata;
        write!(
            f,
            "{:o} {} {} {:04x} {}.{:09} {}.{:09} {:>8} {} {:>8} {}",
            metadata.mode,
            metadata.uid,
            metadata.gid,
            self.entry.flags.bits(),
            metadata.ctime,
            metadata.ctime_nsec,
            metadata.mtime,
            metadata.mtime_nsec,
            metadata.ino,
            self.entry.oid,
            metadata.size,
            self.entry.name_lossy()
        )
    }
}

/// `<oid> <size right-aligned to 10> <name>`
#[derive(new)]
pub struct LargeFileRecord<'e> {
    entry: &'e IndexEntry,
}

impl fmt::Display for LargeFileRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>10} {}",
            self.entry.oid,
            self.entry.metadata.size,
            self.entry.name_lossy()
        )
    }
}
