use crate::areas::refs::BranchEntry;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Result;

impl Repository {
    /// Create a branch at the current HEAD without switching to it
    pub fn create_branch(&self, branch_name: &str) -> Result<BranchName> {
        self.ensure_initialized()?;
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let head = self.refs().read_head()?;
        self.refs().create_branch(&branch_name, &head)?;

        log::info!("created branch {} at {}", branch_name, head.to_short_id());

        Ok(branch_name)
    }

    /// Branches in creation order, flagging the attached one
    pub fn list_branches(&self) -> Result<Vec<BranchEntry>> {
        self.ensure_initialized()?;

        let current = self.refs().current_branch()?;

        Ok(self
            .refs()
            .list_branches()?
            .into_iter()
            .map(|name| {
                let is_current = current.as_ref() == Some(&name);
                BranchEntry::new(name, is_current)
            })
            .collect())
    }
}
