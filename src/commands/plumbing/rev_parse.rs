use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::branch::revision::Revision;
use crate::errors::Result;

impl Repository {
    /// Resolve `token` to a commit id (detached) or a branch (attached)
    pub fn resolve(&self, token: &str) -> Result<Revision> {
        self.ensure_initialized()?;

        Revision::resolve(token, self)
    }

    /// Current head state: attached branch or detached commit
    pub fn head(&self) -> Result<Head> {
        self.ensure_initialized()?;

        self.refs().head()
    }
}
