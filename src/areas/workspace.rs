use crate::areas::database::{COMMIT_INDEX_FILE, COMMIT_MESSAGE_FILE, COMMIT_PARENT_FILE};
use crate::errors::{Error, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Top-level names a commit directory uses for its own records; a tracked
/// file with one of these names would be snapshotted on top of them
const RESERVED_NAMES: [&str; 3] = [COMMIT_INDEX_FILE, COMMIT_MESSAGE_FILE, COMMIT_PARENT_FILE];

/// Working tree file operations.
///
/// All paths handed to the workspace are relative to the work tree root and
/// have been checked by `normalize`.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    control_path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>, control_path: Box<Path>) -> Self {
        Workspace { path, control_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user supplied path into a tracked path
    ///
    /// Accepts relative paths, or absolute paths inside the work tree. The
    /// result has only normal components, is valid UTF-8 without newlines,
    /// does not point into the control directory, and does not start with a
    /// name reserved inside commit directories.
    pub fn normalize(&self, path: &Path) -> Result<PathBuf> {
        let invalid = || Error::invalid_path(path.display().to_string());

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| invalid())?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => continue,
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid());
                }
            }
        }

        let as_str = normalized.to_str().ok_or_else(invalid)?;
        if as_str.is_empty() || as_str.contains('\n') {
            return Err(invalid());
        }

        if self.path.join(&normalized).starts_with(&self.control_path) {
            return Err(invalid());
        }

        if let Some(Component::Normal(first)) = normalized.components().next()
            && RESERVED_NAMES.iter().any(|name| first == *name)
        {
            return Err(invalid());
        }

        Ok(normalized)
    }

    pub fn is_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    /// Fail with a not-found I/O error unless `file_path` is a regular file
    pub fn ensure_file(&self, file_path: &Path) -> Result<()> {
        if self.is_file(file_path) {
            Ok(())
        } else {
            Err(Error::io(
                file_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "tracked file is missing"),
            ))
        }
    }

    /// Copy a work tree file to `destination`, creating its parent directories
    pub fn export_file(&self, file_path: &Path, destination: &Path) -> Result<()> {
        let source = self.path.join(file_path);
        copy_with_parents(&source, destination)
    }

    /// Copy `source` into the work tree at `file_path`, creating parent
    /// directories and overwriting an existing file
    ///
    /// A directory at `file_path` is never replaced; callers run
    /// `check_importable` before their first write.
    pub fn import_file(&self, source: &Path, file_path: &Path) -> Result<()> {
        let destination = self.path.join(file_path);

        if destination.is_dir() {
            return Err(Error::obstructed(file_path.display().to_string()));
        }

        copy_with_parents(source, &destination)
    }

    /// Fail with `Obstructed` if writing `file_path` would destroy anything
    /// other than the files in `leaving`
    ///
    /// `leaving` lists the tracked files the caller deletes before importing;
    /// directories made only of those files are pruned away and do not count.
    pub fn check_importable(&self, file_path: &Path, leaving: &[PathBuf]) -> Result<()> {
        let obstructed = || Error::obstructed(file_path.display().to_string());
        let destination = self.path.join(file_path);

        if destination.is_dir() {
            for entry in WalkDir::new(&destination).min_depth(1) {
                let entry = entry.map_err(|e| Error::Io(e.into()))?;
                if entry.file_type().is_dir() {
                    continue;
                }

                let relative = entry.path().strip_prefix(&self.path).map_err(|_| obstructed())?;
                if !leaving.iter().any(|path| path == relative) {
                    return Err(obstructed());
                }
            }
        }

        for ancestor in file_path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if self.path.join(ancestor).is_file() && !leaving.iter().any(|path| path == ancestor) {
                return Err(obstructed());
            }
        }

        Ok(())
    }

    /// Delete a work tree file, then prune the directories it leaves empty
    ///
    /// # Returns
    ///
    /// false if the file was already gone
    pub fn remove_file(&self, file_path: &Path) -> Result<bool> {
        let path = self.path.join(file_path);

        match std::fs::remove_file(&path) {
            Ok(()) => {
                self.prune_empty_parent_dirs(&path)?;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(&path, e)),
        }
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && parent != &*self.path
            && parent.starts_with(&self.path)
            && parent
                .read_dir()
                .map_err(|e| Error::io(parent, e))?
                .next()
                .is_none()
        {
            std::fs::remove_dir(parent).map_err(|e| Error::io(parent, e))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}

fn copy_with_parents(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    std::fs::copy(source, destination).map_err(|e| Error::io(source, e))?;

    Ok(())
}
