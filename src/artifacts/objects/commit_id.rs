//! Commit identifier
//!
//! Identifiers are 40-character lowercase hexadecimal strings. The all-zero
//! identifier is the root sentinel: it denotes "no commits yet", is always a
//! valid resolution target, and never has a commit directory.
//!
//! ## Derivation
//!
//! A new identifier is `sha1(parent ++ branch_name)`. The scheme is a chain
//! hash over `(parent, branch)`, not over file content, so replaying the same
//! operations on a branch with the same name yields the same identifiers.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::COMMIT_ID_LENGTH;
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// The root sentinel
    pub fn root() -> Self {
        Self("0".repeat(COMMIT_ID_LENGTH))
    }

    pub fn is_root(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// Parse a well-formed identifier
    ///
    /// # Returns
    ///
    /// None unless `id` is exactly 40 lowercase hex characters
    pub fn parse(id: &str) -> Option<Self> {
        let well_formed = id.len() == COMMIT_ID_LENGTH
            && id.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        well_formed.then(|| Self(id.to_string()))
    }

    /// Derive the identifier of the commit following `parent` on `branch`
    pub fn derive(parent: &CommitId, branch: &BranchName) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(parent.as_ref().as_bytes());
        hasher.update(branch.as_ref().as_bytes());

        let id = hasher.finalize();
        Self(format!("{id:x}"))
    }

    /// Get abbreviated form of the identifier
    pub fn to_short_id(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn root_is_all_zeros() {
        let root = CommitId::root();

        assert!(root.is_root());
        assert_eq!(root.as_ref(), "0000000000000000000000000000000000000000");
        assert_eq!(CommitId::parse(root.as_ref()), Some(root));
    }

    #[test]
    fn derive_matches_sha1_of_parent_and_branch() {
        let master = BranchName::try_parse("master".to_string()).unwrap();
        let id = CommitId::derive(&CommitId::root(), &master);

        let mut hasher = Sha1::new();
        hasher.update(b"0000000000000000000000000000000000000000master");
        assert_eq!(id.as_ref(), format!("{:x}", hasher.finalize()));
        assert!(!id.is_root());
    }

    #[test]
    fn derive_depends_on_branch_name() {
        let master = BranchName::try_parse("master".to_string()).unwrap();
        let feature = BranchName::try_parse("feature".to_string()).unwrap();

        assert_ne!(
            CommitId::derive(&CommitId::root(), &master),
            CommitId::derive(&CommitId::root(), &feature)
        );
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!(CommitId::parse("").is_none());
        assert!(CommitId::parse("0").is_none());
        assert!(CommitId::parse("master").is_none());
        assert!(CommitId::parse(&"A".repeat(COMMIT_ID_LENGTH)).is_none());
        assert!(CommitId::parse(&"g".repeat(COMMIT_ID_LENGTH)).is_none());
        assert!(CommitId::parse(&"a".repeat(COMMIT_ID_LENGTH + 1)).is_none());
    }

    proptest! {
        #[test]
        fn derived_ids_are_well_formed(branch in "[a-zA-Z0-9_-]{1,20}") {
            let branch = BranchName::try_parse(branch).unwrap();
            let id = CommitId::derive(&CommitId::root(), &branch);

            assert_eq!(CommitId::parse(id.as_ref()), Some(id.clone()));
            assert_eq!(id.to_short_id().len(), 7);
        }
    }
}
