//! Repository data structures
//!
//! - `branch`: Branch names, head state and reference resolution
//! - `log`: Commit history traversal
//! - `merge`: Merge actions and reports
//! - `objects`: Commit identifiers and commit records

pub mod branch;
pub mod log;
pub mod merge;
pub mod objects;
