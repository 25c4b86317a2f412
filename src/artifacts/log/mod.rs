//! Commit history traversal
//!
//! - `rev_list`: walks parent pointers from a starting commit until the root
//!   sentinel

pub mod rev_list;
