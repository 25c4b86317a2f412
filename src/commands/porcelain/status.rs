use crate::areas::repository::Repository;
use crate::errors::Result;
use std::path::PathBuf;

impl Repository {
    /// Tracked paths in index order
    pub fn status(&self) -> Result<Vec<PathBuf>> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        Ok(index.into_entries())
    }
}
