//! Branch names, head state and reference resolution
//!
//! - `branch_name`: validated branch names
//! - `head`: attached/detached head state
//! - `revision`: result of resolving a token to a commit

pub mod branch_name;
pub mod head;
pub mod revision;

/// Branch names become file names in the control directory, so anything that
/// could escape a single path component is rejected along with the usual
/// git-style restrictions.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f/]";
