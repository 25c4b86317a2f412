use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};

/// A token resolved to a point in history.
///
/// Resolution tries, in order:
/// - a commit id: 40 lowercase hex characters naming the root sentinel or an
///   existing commit directory, resolved as `Detached`
/// - a branch name listed in `.branches`, resolved as `Attached` at the
///   branch's stored head
///
/// Commit ids win over branch names. A branch whose name is itself a valid
/// commit id is therefore shadowed whenever that commit exists; this is kept
/// as-is and reported through a warning rather than decided either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Detached(CommitId),
    Attached(BranchName, CommitId),
}

impl Revision {
    pub fn resolve(token: &str, repository: &Repository) -> Result<Self> {
        let branch = repository.refs().find_branch(token)?;

        if let Some(commit_id) = CommitId::parse(token)
            && repository.database().exists(&commit_id)
        {
            if branch.is_some() {
                log::warn!(
                    "'{token}' names both a commit and a branch; resolving to the commit"
                );
            }

            return Ok(Revision::Detached(commit_id));
        }

        match branch {
            Some(branch) => {
                let head = repository.refs().read_branch_head(&branch)?;
                Ok(Revision::Attached(branch, head))
            }
            None => Err(Error::no_such_ref(token)),
        }
    }

    pub fn commit_id(&self) -> &CommitId {
        match self {
            Revision::Detached(commit_id) => commit_id,
            Revision::Attached(_, commit_id) => commit_id,
        }
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Revision::Detached(_) => None,
            Revision::Attached(branch, _) => Some(branch),
        }
    }
}
