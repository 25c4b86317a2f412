use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

impl Repository {
    /// Restore one file from a commit into the work tree and track it
    ///
    /// `commit_id` must be a commit id (the root sentinel included); branch
    /// names are not accepted. The sentinel's snapshot is empty, so resetting
    /// any path from it fails.
    pub fn reset(&self, commit_id: &str, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.ensure_initialized()?;

        let commit_id = CommitId::parse(commit_id)
            .filter(|commit_id| self.database().exists(commit_id))
            .ok_or_else(|| Error::no_such_commit(commit_id))?;
        let path = self.workspace().normalize(path.as_ref())?;

        let snapshot = self.database().snapshot_index(&commit_id)?;
        if !snapshot.contains(&path) {
            return Err(Error::not_in_commit(
                path.display().to_string(),
                commit_id.as_ref(),
            ));
        }

        self.workspace().check_importable(&path, &[])?;

        let stored = self.database().snapshot_file_path(&commit_id, &path);
        self.workspace().import_file(&stored, &path)?;

        let mut index = self.index();
        index.rehydrate()?;
        if !index.contains(&path) {
            index.add(path.clone())?;
            index.write_updates()?;
        }

        log::debug!(
            "restored {} from {}",
            path.display(),
            commit_id.to_short_id()
        );

        Ok(path)
    }
}
