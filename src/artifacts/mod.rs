//! Index data structures and decoding
//!
//! - `core`: Shared output utilities (pager wrapper)
//! - `index`: Index file header and entry decoding, display records

pub mod core;
pub mod index;
