//! Core data types for stable matching
//!
//! ## Types
//!
//! - [`Instance`]: validated preference rankings for both sides
//! - [`Side`]: Hospital or Student
//! - [`Matching`]: a perfect matching produced by the engines
//! - [`CandidateMatching`]: an unchecked matching supplied for verification
//! - [`MatchReceipt`]: run summary with an SSZ encoding
//!
//! ## Identities
//!
//! All public identities are 1-based, matching the file formats.

mod instance;
mod matching;
mod receipt;

pub use instance::{check_ranking, Instance, Side};
pub use matching::{CandidateMatching, CandidatePair, Matching};
pub use receipt::MatchReceipt;
