//! Plumbing operations
//!
//! - `rev_parse`: resolve a token to a branch or commit id

pub mod rev_parse;
