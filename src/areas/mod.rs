//! I/O side of the tool
//!
//! - `index_file`: locating and loading the index file from disk
//! - `inspector`: owns the loaded index and the output writer; the commands
//!   in [`crate::commands`] are implemented on it

pub mod index_file;
pub mod inspector;
