//! Merge results
//!
//! Merging imports another commit's tracked files. There is no content-level
//! reconciliation: each foreign path is either copied in and tracked, or,
//! when the path is already tracked locally, written next to the local file
//! as a conflicted copy.

pub mod merge_report;
