//! Entry flag words
//!
//! ```text
//!  15  14  13 12  11 ........ 0
//! [V] [X] [stage] [name length]
//! ```
//!
//! `V` is assume-valid, `X` marks a second (extended) flags word on disk.

use bitflags::bitflags;

bitflags! {
    /// First flags word of an on-disk entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EntryFlags: u16 {
        const ASSUME_VALID = 0x8000;
        const EXTENDED = 0x4000;
        const STAGE_MASK = 0x3000;
        const NAME_MASK = 0x0FFF;
    }
}

bitflags! {
    /// Second flags word, present only when [`EntryFlags::EXTENDED`] is set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExtendedFlags: u16 {
        const SKIP_WORKTREE = 0x4000;
        const INTENT_TO_ADD = 0x2000;

        const _ = !0;
    }
}

impl EntryFlags {
    /// Keeps every bit, including ones without a name.
    pub fn from_word(word: u16) -> Self {
        Self::from_bits_retain(word)
    }

    pub fn name_len(self) -> usize {
        (self.bits() & Self::NAME_MASK.bits()) as usize
    }

    pub fn is_extended(self) -> bool {
        self.contains(Self::EXTENDED)
    }

    /// Number of flag bytes on disk, accounting for the extended word.
    pub fn on_disk_size(self) -> usize {
        if self.is_extended() { 4 } else { 2 }
    }
}

/// What to do with entries that carry an extended flags word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtendedFlagsPolicy {
    /// Read the second word and keep decoding.
    #[default]
    Skip,
    /// Fail with [`IndexError::UnsupportedExtendedFlags`](super::error::IndexError::UnsupportedExtendedFlags).
    Reject,
}
