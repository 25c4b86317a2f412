//! Repository operations
//!
//! Operations are `impl Repository` blocks, split the way git splits its
//! commands:
//!
//! - `plumbing`: low-level queries (reference resolution)
//! - `porcelain`: user-facing workflows (add, commit, checkout, merge, ...)
//!
//! Operations return data; rendering it is left to the binary.

pub mod plumbing;
pub mod porcelain;
