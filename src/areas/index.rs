//! Staging area
//!
//! The index is the ordered list of paths scheduled for the next commit.
//! Paths are unique and kept in insertion order; order only matters for
//! deterministic listing.
//!
//! ## File Format
//!
//! `.index` in the control directory holds one work-tree-relative path per
//! line, each terminated by a newline. An empty file is an empty index.
//!
//! ## Atomicity
//!
//! Updates are written to `.newindex` and then renamed over `.index`, so an
//! interrupted or failed update leaves the previous index intact.

use crate::errors::{Error, Result};
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = ".index";
const NEW_INDEX_FILE: &str = ".newindex";

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the control directory holding `.index`
    control_path: Box<Path>,
    /// Tracked paths in insertion order
    entries: Vec<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(control_path: Box<Path>) -> Self {
        Index {
            control_path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.control_path.join(INDEX_FILE)
    }

    /// Load the index from disk, discarding any unsaved in-memory changes
    pub fn rehydrate(&mut self) -> Result<()> {
        let path = self.path();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

        self.entries = Self::parse(&content);
        self.changed = false;

        Ok(())
    }

    /// Parse the newline-separated list format shared by `.index` files
    pub fn parse(content: &str) -> Vec<PathBuf> {
        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Render entries in the on-disk list format
    pub fn serialize<'e>(entries: impl IntoIterator<Item = &'e PathBuf>) -> String {
        entries
            .into_iter()
            .map(|entry| format!("{}\n", entry.display()))
            .collect()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn add(&mut self, path: PathBuf) -> Result<()> {
        if self.contains(&path) {
            return Err(Error::duplicate_tracked(path.display().to_string()));
        }

        self.entries.push(path);
        self.changed = true;

        Ok(())
    }

    pub fn remove(&mut self, path: &Path) -> Result<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry == path)
            .ok_or_else(|| Error::not_tracked(path.display().to_string()))?;

        self.entries.remove(position);
        self.changed = true;

        Ok(())
    }

    /// Replace every entry at once, keeping the first occurrence of a path
    pub fn replace_with(&mut self, entries: impl IntoIterator<Item = PathBuf>) {
        self.entries.clear();

        for entry in entries {
            if self.contains(&entry) {
                log::debug!("dropping duplicate index entry {}", entry.display());
                continue;
            }
            self.entries.push(entry);
        }

        self.changed = true;
    }

    /// Persist pending changes with the write-temp-then-rename discipline
    ///
    /// # Locking
    ///
    /// Holds an exclusive lock on the temporary file while writing it.
    pub fn write_updates(&mut self) -> Result<()> {
        if !self.changed {
            return Ok(());
        }

        let new_index_path = self.control_path.join(NEW_INDEX_FILE);
        {
            let mut new_index_file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&new_index_path)
                .map_err(|e| Error::io(&new_index_path, e))?;
            let mut lock = file_guard::lock(&mut new_index_file, Lock::Exclusive, 0, 1)
                .map_err(|e| Error::io(&new_index_path, e))?;

            lock.deref_mut()
                .write_all(Self::serialize(&self.entries).as_bytes())
                .map_err(|e| Error::io(&new_index_path, e))?;
            lock.deref_mut()
                .sync_all()
                .map_err(|e| Error::io(&new_index_path, e))?;
        }

        std::fs::rename(&new_index_path, self.path()).map_err(|e| Error::io(self.path(), e))?;
        self.changed = false;

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<PathBuf> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
