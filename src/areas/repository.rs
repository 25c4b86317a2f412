use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::config::Config;
use crate::errors::{Error, Result};
use std::path::Path;

/// Handle over one repository: a work tree plus its control directory.
///
/// The handle caches nothing. Every operation reads the state it needs from
/// disk and writes its changes back before returning, so a handle can be
/// created per call and dropped afterwards.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    control_path: Box<Path>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(config: &Config) -> Result<Self> {
        let path = config
            .work_tree()
            .canonicalize()
            .map_err(|e| Error::io(config.work_tree(), e))?;
        let control_path = path.join(config.control_dir()).into_boxed_path();

        let database = Database::new(control_path.clone());
        let workspace = Workspace::new(path.clone().into_boxed_path(), control_path.clone());
        let refs = Refs::new(control_path.clone());

        Ok(Repository {
            path: path.into_boxed_path(),
            control_path,
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> &Path {
        &self.control_path
    }

    /// A fresh staging area handle; call `rehydrate` before reading it
    pub fn index(&self) -> Index {
        Index::new(self.control_path.clone())
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path.is_dir()
    }

    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotARepository(self.path.display().to_string()))
        }
    }
}
