//! Porcelain operations
//!
//! - `init`: Create the control directory
//! - `add`: Track paths / stop tracking them
//! - `status`: List tracked paths
//! - `commit`: Freeze the index into a new commit
//! - `log`: Walk history from HEAD
//! - `branch`: Create and list branches
//! - `checkout`: Move the work tree to a branch or commit
//! - `reset`: Restore a single file from a commit
//! - `merge`: Import another commit's tracked files

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod status;
