//! Matching engines for the Hospitals/Residents problem.
//!
//! ## Components
//!
//! 1. **Rank tables**: inverted preference lists for O(1) comparisons
//! 2. **Matcher**: hospital-proposing deferred acceptance
//! 3. **Verifier**: structural check, then blocking-pair search
//!
//! ## Design Principles
//!
//! - **Determinism**: the matcher always lets the lowest-index free hospital
//!   propose, and the verifier reports the first blocking pair in ascending
//!   (hospital, student) order
//! - **No shared state**: each call builds its own arrays and tables
//! - **Synchronous Execution**: both engines are bounded by O(n^2) work
//!
//! The two engines never call each other.
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::{match_hospitals, verify};
//! use stable_match::types::Instance;
//!
//! let instance = Instance::new(
//!     vec![vec![1, 2, 3], vec![2, 3, 1], vec![2, 1, 3]],
//!     vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
//! ).unwrap();
//!
//! let outcome = match_hospitals(&instance);
//! let verdict = verify(&instance, &outcome.matching.to_candidate());
//!
//! assert!(verdict.is_stable());
//! assert_eq!(outcome.proposals, 5);
//! ```

pub mod matcher;
pub mod rank;
pub mod verifier;

pub use matcher::{match_hospitals, DeferredAcceptance, MatchOutcome, Proposal};
pub use rank::RankTable;
pub use verifier::{find_blocking_pair, validate, verify, verify_matching, BlockingPair, Verdict};
