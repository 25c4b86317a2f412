//! A minimal local version-control engine
//!
//! Files are staged in an index, frozen into commits stored as plain
//! directories, and named through branches. The work tree can be moved to
//! any branch or commit (`checkout`), a single file can be restored from a
//! commit (`reset`), and another commit's files can be imported (`merge`).
//!
//! Everything lives in a control directory (`.beargit` by default) inside the
//! work tree; see [`areas`] for the layout.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

pub use areas::refs::BranchEntry;
pub use areas::repository::Repository;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::branch::head::Head;
pub use artifacts::branch::revision::Revision;
pub use artifacts::merge::merge_report::{MergeAction, MergeReport};
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::commit_id::CommitId;
pub use commands::porcelain::commit::COMMIT_MARKER;
pub use config::Config;
pub use errors::{Error, Result};
