use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};
use derive_new::new;
use std::collections::HashSet;

/// Linear walk over parent pointers, newest first.
///
/// The walk stops at the root sentinel. A missing commit directory or a
/// parent cycle yields an error and ends the iteration.
#[derive(new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    start: CommitId,
    #[new(default)]
    seen: HashSet<CommitId>,
    #[new(default)]
    done: bool,
}

impl Iterator for RevList<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.start.is_root() {
            return None;
        }

        if !self.seen.insert(self.start.clone()) {
            self.done = true;
            return Some(Err(Error::corrupt(format!(
                "parent chain of commit {} loops",
                self.start
            ))));
        }

        match self.repository.database().load(&self.start) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.start = commit.parent().clone();
                Some(Ok(commit))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
