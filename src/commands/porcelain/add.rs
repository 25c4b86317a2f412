use crate::areas::repository::Repository;
use crate::errors::Result;
use std::path::{Path, PathBuf};

impl Repository {
    /// Start tracking `path`
    ///
    /// The file does not have to exist yet; it must exist by the time of the
    /// next commit.
    pub fn add(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.ensure_initialized()?;
        let path = self.workspace().normalize(path.as_ref())?;

        let mut index = self.index();
        index.rehydrate()?;
        index.add(path.clone())?;
        index.write_updates()?;

        log::debug!("tracking {}", path.display());

        Ok(path)
    }

    /// Stop tracking `path`; the work tree file is left in place
    pub fn remove(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.ensure_initialized()?;
        let path = self.workspace().normalize(path.as_ref())?;

        let mut index = self.index();
        index.rehydrate()?;
        index.remove(&path)?;
        index.write_updates()?;

        log::debug!("untracked {}", path.display());

        Ok(path)
    }

    pub fn is_tracked(&self, path: impl AsRef<Path>) -> Result<bool> {
        self.ensure_initialized()?;
        let path = self.workspace().normalize(path.as_ref())?;

        let mut index = self.index();
        index.rehydrate()?;

        Ok(index.contains(&path))
    }
}
