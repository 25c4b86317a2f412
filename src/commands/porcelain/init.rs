use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Error, Result};
use std::fs;

impl Repository {
    /// Create the control directory: empty index, branch `master` at the root
    /// sentinel, attached.
    pub fn init(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized(
                self.control_path().display().to_string(),
            ));
        }

        fs::create_dir_all(self.control_path())
            .map_err(|e| Error::io(self.control_path(), e))?;

        let index = self.index();
        fs::write(index.path(), b"").map_err(|e| Error::io(index.path(), e))?;

        self.refs().initialize(&BranchName::default_branch())?;

        log::info!(
            "initialized empty repository in {}",
            self.control_path().display()
        );

        Ok(())
    }
}
