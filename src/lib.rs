//! # index-show
//!
//! Decoder for the Git index file (`.git/index`) and a small CLI that prints
//! its contents.
//!
//! ## Architecture
//!
//! - `artifacts`: The index format itself. Pure decoding over an immutable
//!   [`bytes::Bytes`] buffer, plus the display records for decoded values.
//! - `areas`: Loading the index file from disk and holding the output writer.
//! - `commands`: `show`, `header` and `largefiles`.
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use index_show::artifacts::index::entry_flags::ExtendedFlagsPolicy;
//! use index_show::artifacts::index::hash_algorithm::HashAlgorithm;
//! use index_show::artifacts::index::read_index;
//!
//! # fn main() -> anyhow::Result<()> {
//! let buffer = Bytes::from(std::fs::read(".git/index")?);
//! let (header, entries) = read_index(&buffer, HashAlgorithm::Sha1, ExtendedFlagsPolicy::Skip)?;
//!
//! println!("version {}, {} entries", header.version, header.entries_count);
//! for entry in entries {
//!     let entry = entry?;
//!     println!("{} {}", entry.oid, entry.name_lossy());
//! }
//! # Ok(())
//! # }
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
