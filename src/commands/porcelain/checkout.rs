use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};

impl Repository {
    /// Move the work tree and index to `target`
    ///
    /// `target` is a commit id (detaches HEAD) or a branch name (attaches to
    /// it). With `create_new`, `target` must be an unused name; the branch is
    /// created at the current HEAD and attached.
    ///
    /// The work tree is torn down and rebuilt: every currently tracked file is
    /// deleted, then every file of the target snapshot is copied in. Untracked
    /// files are never touched; when one is in the way of a snapshot file the
    /// checkout fails with `Obstructed` before anything is written.
    ///
    /// `create_new` with a token that already names a commit fails with
    /// `AlreadyExists` rather than detaching to that commit.
    pub fn checkout(&self, target: &str, create_new: bool) -> Result<Head> {
        self.ensure_initialized()?;
        let current = self.refs().head()?;

        // everything that can fail on user input is settled before any write
        let destination = if create_new {
            match Revision::resolve(target, self) {
                Ok(_) => return Err(Error::already_exists(target)),
                Err(Error::NoSuchRef(_)) => {}
                Err(err) => return Err(err),
            }

            let branch = BranchName::try_parse(target.to_string())?;
            Revision::Attached(branch, current.commit().clone())
        } else {
            Revision::resolve(target, self)?
        };
        self.ensure_materializable(destination.commit_id())?;

        // leave the outgoing branch where HEAD is, so returning resumes here
        if let Head::Attached { branch, commit } = &current {
            self.refs().update_branch_head(branch, commit)?;
        }

        if create_new && let Revision::Attached(branch, commit) = &destination {
            self.refs().create_branch(branch, commit)?;
            log::info!("created branch {} at {}", branch, commit.to_short_id());
        }

        self.materialize(destination.commit_id())?;

        let head = match destination {
            Revision::Attached(branch, commit) => {
                self.refs().attach(&branch)?;
                self.refs().update_head(&commit)?;
                Head::Attached { branch, commit }
            }
            Revision::Detached(commit) => {
                self.refs().detach()?;
                self.refs().update_head(&commit)?;
                Head::Detached(commit)
            }
        };

        match &head {
            Head::Attached { branch, .. } => log::info!("switched to branch '{branch}'"),
            Head::Detached(commit) => log::info!("HEAD is now at {}", commit.to_short_id()),
        }

        Ok(head)
    }

    /// Check that the snapshot of `target` can be written once the currently
    /// tracked files are gone
    fn ensure_materializable(&self, target: &CommitId) -> Result<()> {
        let snapshot = self.database().snapshot_index(target)?;

        let mut index = self.index();
        index.rehydrate()?;
        let leaving = index.into_entries();

        snapshot
            .iter()
            .try_for_each(|path| self.workspace().check_importable(path, &leaving))
    }

    /// Replace tracked work tree files and the index with a commit's snapshot
    fn materialize(&self, target: &CommitId) -> Result<()> {
        let snapshot = self.database().snapshot_index(target)?;

        let mut index = self.index();
        index.rehydrate()?;

        for path in index.entries() {
            if !self.workspace().remove_file(path)? {
                log::debug!("tracked file {} was already gone", path.display());
            }
        }

        index.replace_with(snapshot.iter().cloned());
        index.write_updates()?;

        for path in &snapshot {
            let stored = self.database().snapshot_file_path(target, path);
            self.workspace().import_file(&stored, path)?;
        }

        log::debug!(
            "materialized {} file(s) from {}",
            snapshot.len(),
            target.to_short_id()
        );

        Ok(())
    }
}
