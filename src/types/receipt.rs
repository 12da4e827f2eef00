//! Receipt summarizing one matching run.
//!
//! The MatchReceipt records the instance size, the proposal count and the
//! matching root, so two runs can be compared without shipping the matching.

use ssz_rs::prelude::*;

use crate::engine::MatchOutcome;

/// Summary of a deferred-acceptance run.
///
/// ## Matching Root
///
/// The 32-byte root is [`Matching::root`](crate::types::Matching::root):
/// SHA-256 over the student ids in hospital order.
///
/// ## Example
///
/// ```
/// use stable_match::engine::match_hospitals;
/// use stable_match::types::{Instance, MatchReceipt};
///
/// let outcome = match_hospitals(&Instance::ordered(3));
/// let receipt = MatchReceipt::from_outcome(&outcome);
///
/// assert_eq!(receipt.n, 3);
/// assert_eq!(receipt.proposals, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Side size of the instance
    pub n: u64,

    /// Proposals made before the run converged
    pub proposals: u64,

    /// SHA-256 root of the resulting matching
    pub matching_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a new receipt
    pub fn new(n: u64, proposals: u64, matching_root: [u8; 32]) -> Self {
        Self {
            n,
            proposals,
            matching_root,
        }
    }

    /// Summarize a matcher outcome
    pub fn from_outcome(outcome: &MatchOutcome) -> Self {
        Self::new(
            outcome.matching.len() as u64,
            outcome.proposals,
            outcome.matching.root(),
        )
    }

    /// Get the matching root as a hex string
    pub fn root_hex(&self) -> String {
        hex::encode(self.matching_root)
    }

    /// Average proposals per hospital
    ///
    /// Returns None for the empty instance.
    pub fn proposals_per_hospital(&self) -> Option<f64> {
        if self.n == 0 {
            None
        } else {
            Some(self.proposals as f64 / self.n as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_hospitals;
    use crate::types::Instance;

    #[test]
    fn test_receipt_new() {
        let root = [1u8; 32];
        let receipt = MatchReceipt::new(3, 5, root);

        assert_eq!(receipt.n, 3);
        assert_eq!(receipt.proposals, 5);
        assert_eq!(receipt.matching_root, root);
    }

    #[test]
    fn test_receipt_from_outcome() {
        let outcome = match_hospitals(&Instance::ordered(4));
        let receipt = MatchReceipt::from_outcome(&outcome);

        assert_eq!(receipt.n, 4);
        assert_eq!(receipt.proposals, 10);
        assert_eq!(receipt.matching_root, outcome.matching.root());
    }

    #[test]
    fn test_receipt_root_hex() {
        let receipt = MatchReceipt::new(1, 1, [0xAB; 32]);

        let hex = receipt.root_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("abab"));
    }

    #[test]
    fn test_receipt_proposals_per_hospital() {
        let receipt = MatchReceipt::new(4, 10, [0u8; 32]);
        assert_eq!(receipt.proposals_per_hospital(), Some(2.5));

        let empty = MatchReceipt::new(0, 0, [0u8; 32]);
        assert_eq!(empty.proposals_per_hospital(), None);
    }

    #[test]
    fn test_receipt_ssz_roundtrip() {
        let receipt = MatchReceipt::new(3, 5, [0xCD; 32]);

        let serialized = ssz_rs::serialize(&receipt).expect("Failed to serialize");
        let deserialized: MatchReceipt =
            ssz_rs::deserialize(&serialized).expect("Failed to deserialize");

        assert_eq!(receipt, deserialized);
    }

    #[test]
    fn test_receipt_ssz_size() {
        let receipt = MatchReceipt::default();
        let bytes = ssz_rs::serialize(&receipt).expect("Failed to serialize");

        // 8 + 8 + 32
        assert_eq!(bytes.len(), 48, "MatchReceipt should serialize to 48 bytes");
    }
}
