//! Commit record
//!
//! A commit is stored as a directory named after its identifier:
//!
//! ```text
//! <control dir>/<commit id>/
//!     .index      tracked paths at commit time, one per line
//!     .msg        commit message, verbatim
//!     .prev       parent commit id
//!     <path>...   copy of every tracked file
//! ```
//!
//! Records are created once by `commit` and never mutated afterwards.

use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    id: CommitId,
    /// Parent commit id, the root sentinel for the first commit of a history
    parent: CommitId,
    message: String,
    /// Copy of the index at commit time
    index: Vec<PathBuf>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parent(&self) -> &CommitId {
        &self.parent
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn index(&self) -> &[PathBuf] {
        &self.index
    }
}
