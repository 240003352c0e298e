use crate::artifacts::index::entry_flags::ExtendedFlagsPolicy;
use crate::artifacts::index::error::Result;
use crate::artifacts::index::hash_algorithm::HashAlgorithm;
use crate::artifacts::index::index_entry::IndexEntry;
use bytes::Bytes;
use std::iter::FusedIterator;

/// Lazy sequence of entries following the index header.
///
/// Ends cleanly once the declared count is reached or the buffer runs out,
/// whichever comes first. A decode failure is yielded once as `Err` and ends
/// the sequence.
#[derive(Debug, Clone)]
pub struct Entries {
    buffer: Bytes,
    offset: usize,
    remaining: u32,
    hash: HashAlgorithm,
    policy: ExtendedFlagsPolicy,
    failed: bool,
}

impl Entries {
    pub fn new(
        buffer: Bytes,
        start_offset: usize,
        entries_count: u32,
        hash: HashAlgorithm,
        policy: ExtendedFlagsPolicy,
    ) -> Self {
        Entries {
            buffer,
            offset: start_offset,
            remaining: entries_count,
            hash,
            policy,
            failed: false,
        }
    }

    /// Entries declared by the header that have not been produced yet.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Offset of the next entry to decode.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Entries {
    type Item = Result<IndexEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 || self.offset >= self.buffer.len() {
            return None;
        }

        match IndexEntry::decode(&self.buffer, self.offset, self.hash, self.policy) {
            Ok((entry, next_offset)) => {
                self.offset = next_offset;
                self.remaining -= 1;
                Some(Ok(entry))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed || self.offset >= self.buffer.len() {
            (0, Some(0))
        } else {
            (0, Some(self.remaining as usize))
        }
    }
}

impl FusedIterator for Entries {}
