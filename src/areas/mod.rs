//! Core repository components
//!
//! - `database`: Commit snapshot directories
//! - `index`: Staging area (ordered list of tracked paths)
//! - `refs`: HEAD, the attached branch and branch heads
//! - `repository`: Repository handle tying the areas together
//! - `workspace`: Working tree file operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
