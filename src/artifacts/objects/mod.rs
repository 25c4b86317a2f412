//! Commit identifiers and commit records
//!
//! A commit is a frozen copy of the index plus the content of every tracked
//! file, linked to its parent through a fixed-width identifier.
//!
//! - **CommitId**: 40-character lowercase hex identifier
//! - **Commit**: id, parent id, message and the snapshot index

pub mod commit;
pub mod commit_id;

/// Length of a commit identifier in hexadecimal format
pub const COMMIT_ID_LENGTH: usize = 40;
