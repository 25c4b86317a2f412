//! Head state
//!
//! The repository is always in exactly one of two states:
//!
//! - attached to a branch, where HEAD equals that branch's stored head and
//!   commits advance the branch
//! - detached at a commit, where commits are refused
//!
//! On disk the state is split over `.current_branch` (empty when detached)
//! and `.prev` (the HEAD commit id); `Refs::head` folds both into this type.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Attached { branch: BranchName, commit: CommitId },
    Detached(CommitId),
}

impl Head {
    /// The commit the work tree currently reflects
    pub fn commit(&self) -> &CommitId {
        match self {
            Head::Attached { commit, .. } => commit,
            Head::Detached(commit) => commit,
        }
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Attached { branch, .. } => Some(branch),
            Head::Detached(_) => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }
}
