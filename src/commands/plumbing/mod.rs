//! Plumbing commands (raw index dumps)
//!
//! ## Commands
//!
//! - `show`: Header plus one line per entry, every field decoded
//! - `header`: Header fields only

pub mod show_header;
pub mod show_index;
