use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const COMMIT_INDEX_FILE: &str = ".index";
pub const COMMIT_MESSAGE_FILE: &str = ".msg";
pub const COMMIT_PARENT_FILE: &str = ".prev";

/// Commit snapshot store.
///
/// Every commit is a directory named after its id inside the control
/// directory. The root sentinel never has a directory; its snapshot is the
/// empty index.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: write the snapshot into a temporary directory and rename it into place
// once recovery semantics for interrupted commits are settled
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commit_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_ref())
    }

    /// Stored copy of `file_path` inside a commit directory
    pub fn snapshot_file_path(&self, commit_id: &CommitId, file_path: &Path) -> PathBuf {
        self.commit_path(commit_id).join(file_path)
    }

    /// Whether `commit_id` is a valid target: the sentinel or a stored commit
    pub fn exists(&self, commit_id: &CommitId) -> bool {
        commit_id.is_root() || self.commit_path(commit_id).is_dir()
    }

    pub fn load(&self, commit_id: &CommitId) -> Result<Commit> {
        let commit_path = self.commit_path(commit_id);
        if commit_id.is_root() || !commit_path.is_dir() {
            return Err(Error::no_such_commit(commit_id.as_ref()));
        }

        let index = self.snapshot_index(commit_id)?;
        let message_path = commit_path.join(COMMIT_MESSAGE_FILE);
        let message =
            std::fs::read_to_string(&message_path).map_err(|e| Error::io(&message_path, e))?;

        let parent_path = commit_path.join(COMMIT_PARENT_FILE);
        let parent =
            std::fs::read_to_string(&parent_path).map_err(|e| Error::io(&parent_path, e))?;
        let parent = CommitId::parse(parent.trim()).ok_or_else(|| {
            Error::corrupt(format!("invalid parent id in commit {commit_id}"))
        })?;

        Ok(Commit::new(commit_id.clone(), parent, message, index))
    }

    /// The index frozen in a commit, empty for the sentinel
    pub fn snapshot_index(&self, commit_id: &CommitId) -> Result<Vec<PathBuf>> {
        if commit_id.is_root() {
            return Ok(Vec::new());
        }

        let index_path = self.commit_path(commit_id).join(COMMIT_INDEX_FILE);
        let content =
            std::fs::read_to_string(&index_path).map_err(|e| Error::io(&index_path, e))?;

        Ok(Index::parse(&content))
    }

    /// Freeze `commit` together with the live content of its tracked files
    ///
    /// Not transactional: a failure part way through leaves a partially
    /// populated commit directory behind.
    pub fn store(&self, commit: &Commit, workspace: &Workspace) -> Result<()> {
        let commit_path = self.commit_path(commit.id());

        if commit_path.exists() {
            log::warn!(
                "commit directory {} already exists and will be overwritten",
                commit.id()
            );
        }

        std::fs::create_dir_all(&commit_path).map_err(|e| Error::io(&commit_path, e))?;

        self.write_commit_file(
            commit.id(),
            COMMIT_INDEX_FILE,
            &Index::serialize(commit.index()),
        )?;
        self.write_commit_file(commit.id(), COMMIT_MESSAGE_FILE, commit.message())?;
        self.write_commit_file(commit.id(), COMMIT_PARENT_FILE, commit.parent().as_ref())?;

        for file_path in commit.index() {
            log::debug!("snapshotting {} into {}", file_path.display(), commit.id());
            workspace.export_file(file_path, &self.snapshot_file_path(commit.id(), file_path))?;
        }

        Ok(())
    }

    /// Every stored commit id, sorted
    pub fn list_commits(&self) -> Result<Vec<CommitId>> {
        let mut commits = Vec::new();

        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;

            if entry.file_type().is_dir()
                && let Some(commit_id) = entry.file_name().to_str().and_then(CommitId::parse)
            {
                commits.push(commit_id);
            }
        }
        commits.sort();

        Ok(commits)
    }

    fn write_commit_file(&self, commit_id: &CommitId, name: &str, content: &str) -> Result<()> {
        let path = self.commit_path(commit_id).join(name);
        std::fs::write(&path, content).map_err(|e| Error::io(&path, e))
    }
}
