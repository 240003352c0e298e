//! Object identifier as stored inside an index entry
//!
//! The index stores object IDs in their raw binary form: 20 bytes for SHA-1
//! repositories, 32 bytes for SHA-256 ones. They are displayed as lowercase
//! hexadecimal, two characters per byte.

use bytes::Bytes;
use std::fmt;

/// Raw object ID bytes, borrowed from the index buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(Bytes);

impl ObjectId {
    pub fn from_raw(raw: Bytes) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Full hexadecimal form (40 or 64 characters)
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(self.0.len() * 2);
        for byte in self.0.iter() {
            hex.push_str(&format!("{byte:02x}"));
        }
        hex
    }

}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
