//! References: HEAD, the attached branch and branch heads
//!
//! ## File Format
//!
//! All reference files live directly in the control directory:
//!
//! - `.prev`: HEAD, the commit id the work tree reflects
//! - `.current_branch`: name of the attached branch, empty when detached
//! - `.branches`: branch names in creation order, one per line
//! - `.branch_<name>`: head commit id of branch `<name>`
//!
//! Reference files are overwritten in place (last writer wins); the handle is
//! locked only for the duration of a single write.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

pub const HEAD_FILE: &str = ".prev";
pub const CURRENT_BRANCH_FILE: &str = ".current_branch";
pub const BRANCHES_FILE: &str = ".branches";
const BRANCH_FILE_PREFIX: &str = ".branch_";

/// One row of a branch listing
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchEntry {
    pub name: BranchName,
    pub is_current: bool,
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory
    path: Box<Path>,
}

impl Refs {
    /// Read HEAD and the attached branch as a single state
    pub fn head(&self) -> Result<Head> {
        let commit = self.read_head()?;

        match self.current_branch()? {
            Some(branch) => Ok(Head::Attached { branch, commit }),
            None => Ok(Head::Detached(commit)),
        }
    }

    pub fn read_head(&self) -> Result<CommitId> {
        self.read_commit_id_file(&self.head_path())
    }

    pub fn update_head(&self, commit_id: &CommitId) -> Result<()> {
        self.update_ref_file(&self.head_path(), commit_id.as_ref())
    }

    /// The attached branch, or None when detached
    pub fn current_branch(&self) -> Result<Option<BranchName>> {
        let path = self.current_branch_path();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let name = content.trim();

        if name.is_empty() {
            Ok(None)
        } else {
            BranchName::try_parse(name.to_string())
                .map(Some)
                .map_err(|_| Error::corrupt(format!("invalid current branch '{name}'")))
        }
    }

    pub fn attach(&self, branch: &BranchName) -> Result<()> {
        self.update_ref_file(&self.current_branch_path(), branch.as_ref())
    }

    pub fn detach(&self) -> Result<()> {
        self.update_ref_file(&self.current_branch_path(), "")
    }

    pub fn list_branches(&self) -> Result<Vec<BranchName>> {
        let path = self.branches_path();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                BranchName::try_parse(line.to_string())
                    .map_err(|_| Error::corrupt(format!("invalid branch name '{line}' in list")))
            })
            .collect()
    }

    /// Look a token up in the branch list
    pub fn find_branch(&self, name: &str) -> Result<Option<BranchName>> {
        Ok(self
            .list_branches()?
            .into_iter()
            .find(|branch| branch.as_ref() == name))
    }

    pub fn branch_exists(&self, name: &BranchName) -> Result<bool> {
        Ok(self.list_branches()?.contains(name))
    }

    pub fn read_branch_head(&self, name: &BranchName) -> Result<CommitId> {
        self.read_commit_id_file(&self.branch_path(name))
    }

    pub fn update_branch_head(&self, name: &BranchName, commit_id: &CommitId) -> Result<()> {
        self.update_ref_file(&self.branch_path(name), commit_id.as_ref())
    }

    /// Register a new branch pointing at `source`
    pub fn create_branch(&self, name: &BranchName, source: &CommitId) -> Result<()> {
        if self.branch_exists(name)? {
            return Err(Error::already_exists(name.as_ref()));
        }

        // the head file first, so a listed branch always has a head
        self.update_branch_head(name, source)?;

        let mut branches = self.list_branches()?;
        branches.push(name.clone());
        let content = branches
            .iter()
            .map(|branch| format!("{branch}\n"))
            .collect::<String>();

        self.update_ref_file(&self.branches_path(), &content)
    }

    /// Write a fresh set of reference files for a new repository
    pub fn initialize(&self, default_branch: &BranchName) -> Result<()> {
        let root = CommitId::root();

        self.update_ref_file(&self.branches_path(), &format!("{default_branch}\n"))?;
        self.update_head(&root)?;
        self.attach(default_branch)?;
        self.update_branch_head(default_branch, &root)
    }

    /// Overwrite a reference file, holding an exclusive lock while writing
    pub fn update_ref_file(&self, path: &Path, raw_ref: &str) -> Result<()> {
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
        let mut lock =
            file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1).map_err(|e| Error::io(path, e))?;

        lock.deref_mut()
            .write_all(raw_ref.as_bytes())
            .map_err(|e| Error::io(path, e))
    }

    fn read_commit_id_file(&self, path: &Path) -> Result<CommitId> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let content = content.trim();

        CommitId::parse(content)
            .ok_or_else(|| Error::corrupt(format!("invalid commit id '{content}' in {path:?}")))
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    pub fn current_branch_path(&self) -> PathBuf {
        self.path.join(CURRENT_BRANCH_FILE)
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join(BRANCHES_FILE)
    }

    pub fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.path.join(format!("{BRANCH_FILE_PREFIX}{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    fn initialized_refs(dir: &TempDir) -> Refs {
        let refs = Refs::new(dir.path().to_path_buf().into_boxed_path());
        refs.initialize(&BranchName::default_branch()).unwrap();
        refs
    }

    fn branch(name: &str) -> BranchName {
        BranchName::try_parse(name.to_string()).unwrap()
    }

    #[test]
    fn initialize_attaches_master_at_the_root() {
        let dir = TempDir::new().unwrap();
        let refs = initialized_refs(&dir);

        assert_eq!(
            refs.head().unwrap(),
            Head::Attached {
                branch: BranchName::default_branch(),
                commit: CommitId::root(),
            }
        );
        assert_eq!(refs.list_branches().unwrap(), vec![branch("master")]);
        assert_eq!(
            refs.read_branch_head(&branch("master")).unwrap(),
            CommitId::root()
        );
    }

    #[test]
    fn detach_is_stored_as_an_empty_branch_file() {
        let dir = TempDir::new().unwrap();
        let refs = initialized_refs(&dir);

        refs.detach().unwrap();

        assert_eq!(std::fs::read_to_string(refs.current_branch_path()).unwrap(), "");
        assert_eq!(refs.head().unwrap(), Head::Detached(CommitId::root()));
    }

    #[test]
    fn create_branch_appends_in_creation_order() {
        let dir = TempDir::new().unwrap();
        let refs = initialized_refs(&dir);

        refs.create_branch(&branch("zeta"), &CommitId::root()).unwrap();
        refs.create_branch(&branch("alpha"), &CommitId::root()).unwrap();

        assert_eq!(
            std::fs::read_to_string(refs.branches_path()).unwrap(),
            "master\nzeta\nalpha\n"
        );
        assert!(dir.path().join(".branch_alpha").exists());
    }

    #[test]
    fn create_existing_branch_fails() {
        let dir = TempDir::new().unwrap();
        let refs = initialized_refs(&dir);

        let result = refs.create_branch(&branch("master"), &CommitId::root());

        assert!(matches!(result, Err(Error::AlreadyExists(name)) if name == "master"));
        assert_eq!(refs.list_branches().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_head_is_reported() {
        let dir = TempDir::new().unwrap();
        let refs = initialized_refs(&dir);
        std::fs::write(refs.head_path(), "not a commit").unwrap();

        assert!(matches!(refs.read_head(), Err(Error::Corrupt(_))));
    }
}
