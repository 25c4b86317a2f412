//! Repository configuration
//!
//! A repository is located by two settings:
//!
//! - the work tree root, from `-C/--work-tree`, `BEARGIT_WORK_TREE`, or the
//!   current directory
//! - the control directory name inside it, from `--control-dir`,
//!   `BEARGIT_DIR`, or `.beargit`

use crate::errors::{Error, Result};
use std::path::{Component, Path, PathBuf};

pub const WORK_TREE_ENV: &str = "BEARGIT_WORK_TREE";
pub const CONTROL_DIR_ENV: &str = "BEARGIT_DIR";
pub const DEFAULT_CONTROL_DIR: &str = ".beargit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    work_tree: PathBuf,
    control_dir: String,
}

impl Config {
    /// Build a configuration, checking that the control directory is a single
    /// plain path component
    pub fn try_new(work_tree: impl Into<PathBuf>, control_dir: impl Into<String>) -> Result<Self> {
        let control_dir = control_dir.into();

        let mut components = Path::new(&control_dir).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Config {
                work_tree: work_tree.into(),
                control_dir,
            }),
            _ => Err(Error::invalid_path(control_dir)),
        }
    }

    /// Configuration for a work tree using the default control directory
    pub fn for_work_tree(work_tree: impl Into<PathBuf>) -> Self {
        Config {
            work_tree: work_tree.into(),
            control_dir: DEFAULT_CONTROL_DIR.to_string(),
        }
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    pub fn control_dir(&self) -> &str {
        &self.control_dir
    }
}
