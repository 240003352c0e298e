//! Command implementations
//!
//! Every command is an `impl` block on [`Inspector`](crate::areas::inspector::Inspector):
//!
//! - `plumbing`: Raw dumps of the decoded index (`show`, `header`)
//! - `porcelain`: Summaries computed from the entries (`largefiles`)

pub mod plumbing;
pub mod porcelain;
