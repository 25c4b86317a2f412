//! Error kinds surfaced by every repository operation
//!
//! Each public operation returns either its output or exactly one of these
//! variants. Nothing is retried and nothing is swallowed; the binary maps
//! any of them to exit code 1.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File {0} has already been added.")]
    DuplicateTracked(String),

    #[error("File {0} not tracked.")]
    NotTracked(String),

    #[error("Message must contain \"{0}\"")]
    InvalidMessage(String),

    #[error("Need to be on HEAD of a branch to commit.")]
    DetachedHead,

    #[error("No branch or commit {0} exists.")]
    NoSuchRef(String),

    #[error("A branch named {0} already exists.")]
    AlreadyExists(String),

    #[error("Commit {0} does not exist.")]
    NoSuchCommit(String),

    #[error("{path} is not in the index of commit {commit}.")]
    NotInCommit { path: String, commit: String },

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("cannot write {0}: an existing file or directory is in the way")]
    Obstructed(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("not a beargit repository: {0}")]
    NotARepository(String),

    #[error("repository already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("corrupt repository state: {0}")]
    Corrupt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn duplicate_tracked(path: impl Into<String>) -> Self {
        Self::DuplicateTracked(path.into())
    }

    pub fn not_tracked(path: impl Into<String>) -> Self {
        Self::NotTracked(path.into())
    }

    pub fn no_such_ref(token: impl Into<String>) -> Self {
        Self::NoSuchRef(token.into())
    }

    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists(name.into())
    }

    pub fn no_such_commit(id: impl Into<String>) -> Self {
        Self::NoSuchCommit(id.into())
    }

    pub fn not_in_commit(path: impl Into<String>, commit: impl Into<String>) -> Self {
        Self::NotInCommit {
            path: path.into(),
            commit: commit.into(),
        }
    }

    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    pub fn obstructed(path: impl Into<String>) -> Self {
        Self::Obstructed(path.into())
    }

    pub fn invalid_branch_name(name: impl Into<String>) -> Self {
        Self::InvalidBranchName(name.into())
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }

    /// Wrap an I/O error, keeping its kind and prefixing the offending path.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.into().display(), err),
        ))
    }
}
