use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};

/// Every commit message has to contain this, anywhere, verbatim
pub const COMMIT_MARKER: &str = "THIS IS BEAR TERRITORY!";

pub fn is_commit_message_ok(message: &str) -> bool {
    message.contains(COMMIT_MARKER)
}

impl Repository {
    /// Freeze the index and the live content of every tracked file into a new
    /// commit on the attached branch
    ///
    /// # Returns
    ///
    /// The id of the new commit, which becomes both HEAD and the branch head
    pub fn commit(&self, message: &str) -> Result<CommitId> {
        self.ensure_initialized()?;

        if !is_commit_message_ok(message) {
            return Err(Error::InvalidMessage(COMMIT_MARKER.to_string()));
        }

        let (branch, parent) = match self.refs().head()? {
            Head::Attached { branch, commit } => (branch, commit),
            Head::Detached(_) => return Err(Error::DetachedHead),
        };

        let mut index = self.index();
        index.rehydrate()?;

        // nothing is written unless every tracked file can be snapshotted
        index
            .entries()
            .try_for_each(|path| self.workspace().ensure_file(path))?;

        let commit_id = CommitId::derive(&parent, &branch);
        let commit = Commit::new(
            commit_id.clone(),
            parent,
            message.to_string(),
            index.into_entries(),
        );

        self.database().store(&commit, self.workspace())?;
        self.refs().update_head(&commit_id)?;
        self.refs().update_branch_head(&branch, &commit_id)?;

        log::info!(
            "[{} {}] {}",
            branch,
            commit_id.to_short_id(),
            commit.short_message()
        );

        Ok(commit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_must_contain_the_marker_exactly() {
        assert!(!is_commit_message_ok("THIS IS NOT BEAR TERRITORY!"));
        assert!(!is_commit_message_ok("THIS  IS BEAR TERRITORY!"));
        assert!(!is_commit_message_ok("this is bear territory!"));
        assert!(!is_commit_message_ok("THIS IS BEAR TERRITORY"));
        assert!(!is_commit_message_ok(""));
    }

    #[test]
    fn marker_may_appear_anywhere() {
        assert!(is_commit_message_ok("THIS IS BEAR TERRITORY!"));
        assert!(is_commit_message_ok("!THIS IS BEAR TERRITORY!"));
        assert!(is_commit_message_ok("THIS IS BEAR TERRITORY!1234"));
        assert!(is_commit_message_ok(
            "THIS IS BEAR TERRITORY 1234 THIS IS BEAR TERRITORY! THIS IS NOT BEAR TERRITORY!"
        ));
    }
}
