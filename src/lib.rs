//! # Stable Match
//!
//! Hospitals/Residents stable matching with equal sides.
//!
//! ## Architecture
//!
//! - **Types**: Instance, Matching, CandidateMatching, MatchReceipt
//! - **Engine**: rank tables, deferred-acceptance matcher, stability verifier
//! - **Text**: preference and matching file formats
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical instances give identical matchings, proposal
//!    counts and diagnostics
//! 2. **Validated Inputs**: an `Instance` cannot be built unless every ranking is
//!    a permutation of `1..=n`
//! 3. **Verdicts, not panics**: bad candidate matchings come back as
//!    `Verdict::Invalid` with a reason
//!
//! ## Complexity
//!
//! - Matcher: at most n^2 proposals
//! - Verifier: O(n^2) time and memory

// ============================================================================
// Module declarations
// ============================================================================

/// Error types shared by instances, parsers and the verifier
pub mod error;

/// Core data types: Instance, Matching, MatchReceipt
pub mod types;

/// Matcher, verifier and rank tables
pub mod engine;

/// Preference and matching file formats
pub mod text;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{match_hospitals, verify, BlockingPair, MatchOutcome, RankTable, Verdict};
pub use error::{InstanceError, MatchingError, ParseError};
pub use text::{parse_instance, read_matching, write_instance, write_matching};
pub use types::{CandidateMatching, Instance, MatchReceipt, Matching, Side};
