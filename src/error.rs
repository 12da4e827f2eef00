//! Error types for instance construction, preference parsing and matchings.
//!
//! ## Channels
//!
//! - [`InstanceError`]: an in-memory instance breaks the permutation invariant
//! - [`ParseError`]: preference text rejected before any engine runs
//! - [`MatchingError`]: the single INVALID vocabulary shared by the matching
//!   file reader and the verifier's structural check
//!
//! Line numbers are 1-based and count non-blank lines only.

use thiserror::Error;

use crate::types::Side;

// ============================================================================
// InstanceError
// ============================================================================

/// A preference instance that violates its own invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The two sides do not have the same number of lists
    #[error("expected {expected} {side} preference lists, found {found}")]
    WrongListCount {
        side: Side,
        expected: usize,
        found: usize,
    },

    /// A list is not a full ranking
    #[error("{side} {owner} list must have {expected} numbers, found {found}")]
    WrongLength {
        side: Side,
        owner: usize,
        expected: usize,
        found: usize,
    },

    /// An identity outside `1..=n`
    #[error("{side} {owner} has out-of-range id {id}")]
    OutOfRange { side: Side, owner: usize, id: i64 },

    /// An identity listed twice
    #[error("{side} {owner} repeats id {id}")]
    Repeated { side: Side, owner: usize, id: i64 },
}

// ============================================================================
// ParseError
// ============================================================================

/// Rejection of preference file text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input file")]
    Empty,

    #[error("line 1: expected a single integer n")]
    HeaderShape,

    #[error("line 1: n must be an integer")]
    HeaderNotInteger,

    #[error("line 1: n must be >= 0")]
    NegativeSize,

    #[error("expected {expected} non-empty lines, found {found}")]
    LineCount { expected: usize, found: usize },

    #[error("line {line}: non-integer token found")]
    NonInteger { line: usize },

    /// A preference list that breaks the instance invariant
    #[error("line {line}: {reason}")]
    Preference { line: usize, reason: InstanceError },
}

impl ParseError {
    /// The 1-based non-blank line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::HeaderShape | ParseError::HeaderNotInteger | ParseError::NegativeSize => {
                Some(1)
            }
            ParseError::NonInteger { line } | ParseError::Preference { line, .. } => Some(*line),
            ParseError::Empty | ParseError::LineCount { .. } => None,
        }
    }
}

// ============================================================================
// MatchingError
// ============================================================================

/// Why a candidate matching is INVALID.
///
/// Format problems (from the text reader) and structural problems (from the
/// verifier) share this type so a caller sees one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    #[error("n=0 but matching is not empty")]
    NotEmpty,

    #[error("matching must have exactly {expected} entries, found {found}")]
    WrongEntryCount { expected: usize, found: usize },

    #[error("line {line} must contain exactly 2 integers")]
    LineShape { line: usize },

    #[error("line {line} contains non-integers")]
    NonInteger { line: usize },

    #[error("hospital id {0} is out of range")]
    HospitalOutOfRange(i64),

    #[error("student id {0} is out of range")]
    StudentOutOfRange(i64),

    #[error("hospital {0} appears multiple times")]
    DuplicateHospital(usize),

    #[error("hospital {0} is unmatched")]
    UnmatchedHospital(usize),

    #[error("student {0} matched to multiple hospitals")]
    StudentMatchedMultiple(usize),

    #[error("student {0} is unmatched")]
    UnmatchedStudent(usize),
}
