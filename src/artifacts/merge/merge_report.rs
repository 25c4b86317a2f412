use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// The path was not tracked locally; it was copied in and is now tracked
    Added(PathBuf),
    /// The path was already tracked; the foreign version was written to `copy`
    Conflicted { path: PathBuf, copy: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergeReport {
    source: CommitId,
    #[new(default)]
    actions: Vec<MergeAction>,
}

impl MergeReport {
    /// Side-by-side path used for the foreign version of a conflicting file
    pub fn conflict_path(path: &Path, source: &CommitId) -> PathBuf {
        let mut copy = path.as_os_str().to_owned();
        copy.push(".");
        copy.push(source.as_ref());
        PathBuf::from(copy)
    }

    pub fn source(&self) -> &CommitId {
        &self.source
    }

    pub fn actions(&self) -> &[MergeAction] {
        &self.actions
    }

    pub fn push(&mut self, action: MergeAction) {
        self.actions.push(action);
    }

    pub fn added(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|action| match action {
            MergeAction::Added(path) => Some(path.as_path()),
            MergeAction::Conflicted { .. } => None,
        })
    }

    pub fn conflicted(&self) -> impl Iterator<Item = &Path> {
        self.actions.iter().filter_map(|action| match action {
            MergeAction::Conflicted { path, .. } => Some(path.as_path()),
            MergeAction::Added(_) => None,
        })
    }
}
