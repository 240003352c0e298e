//! Errors raised while decoding an index buffer.

use thiserror::Error;

/// Decoding failure. The decoder never recovers partially: every failure is
/// returned to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The first header field is not "DIRC".
    #[error("invalid index signature {0:#010x}, expected 0x44495243 (\"DIRC\")")]
    InvalidSignature(u32),

    /// A header or entry field would extend past the end of the buffer.
    #[error(
        "index truncated at offset {offset}: needed {needed} bytes, only {available} available"
    )]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Raw bounds violation reported by [`ByteCursor`](super::byte_cursor::ByteCursor).
    /// Decoders convert it to [`IndexError::Truncated`].
    #[error("read of {len} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    /// An entry carries extended flags and the caller asked to reject them.
    #[error("entry at offset {offset} uses extended flags")]
    UnsupportedExtendedFlags { offset: usize },
}

impl IndexError {
    /// Turn a cursor bounds violation into the truncation error callers see.
    pub(crate) fn into_truncated(self) -> Self {
        match self {
            IndexError::OutOfBounds {
                offset,
                len,
                available,
            } => IndexError::Truncated {
                offset,
                needed: len,
                available: available.saturating_sub(offset),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
