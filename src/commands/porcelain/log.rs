use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;

impl Repository {
    /// Walk history from HEAD, newest first
    pub fn history(&self) -> Result<RevList<'_>> {
        self.ensure_initialized()?;

        Ok(RevList::new(self, self.refs().read_head()?))
    }

    /// At most `limit` commits reachable from HEAD, newest first
    ///
    /// Empty when HEAD is the root sentinel.
    pub fn log(&self, limit: usize) -> Result<Vec<Commit>> {
        self.history()?.take(limit).collect()
    }

    /// Every commit in the store, reachable or not
    pub fn commits(&self) -> Result<Vec<CommitId>> {
        self.ensure_initialized()?;

        self.database().list_commits()
    }
}
