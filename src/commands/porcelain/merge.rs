use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::merge::merge_report::{MergeAction, MergeReport};
use crate::errors::Result;

impl Repository {
    /// Import the tracked files of another branch or commit
    ///
    /// Paths not tracked locally are copied in and tracked. Paths already
    /// tracked keep their local content; the foreign version is written next
    /// to them as `<path>.<source commit id>` and left untracked. Nothing is
    /// committed.
    ///
    /// Fails with `Obstructed`, before writing anything, when a destination
    /// is an existing directory or sits below an existing file.
    pub fn merge(&self, ref_or_id: &str) -> Result<MergeReport> {
        self.ensure_initialized()?;

        let source = Revision::resolve(ref_or_id, self)?.commit_id().clone();
        let snapshot = self.database().snapshot_index(&source)?;

        let mut index = self.index();
        index.rehydrate()?;

        // every destination is checked before the first copy
        for path in &snapshot {
            let destination = if index.contains(path) {
                MergeReport::conflict_path(path, &source)
            } else {
                path.clone()
            };
            self.workspace().check_importable(&destination, &[])?;
        }

        let mut report = MergeReport::new(source.clone());

        for path in snapshot {
            let stored = self.database().snapshot_file_path(&source, &path);

            if index.contains(&path) {
                let copy = MergeReport::conflict_path(&path, &source);
                self.workspace().import_file(&stored, &copy)?;

                log::debug!("{} conflicted copy created", path.display());
                report.push(MergeAction::Conflicted { path, copy });
            } else {
                self.workspace().import_file(&stored, &path)?;
                index.add(path.clone())?;
                // keep the index in step with the work tree after every file
                index.write_updates()?;

                log::debug!("{} added", path.display());
                report.push(MergeAction::Added(path));
            }
        }

        log::info!(
            "merged {}: {} added, {} conflicted",
            source.to_short_id(),
            report.added().count(),
            report.conflicted().count()
        );

        Ok(report)
    }
}
