//! Porcelain commands (summaries built on the decoded entries)
//!
//! ## Commands
//!
//! - `largefiles`: Largest tracked files according to the index

pub mod large_files;
