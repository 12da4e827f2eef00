//! Stability verifier for candidate matchings.
//!
//! ## Verdicts
//!
//! Every candidate gets exactly one of:
//!
//! - `VALID STABLE`
//! - `INVALID (<reason>)` - not a perfect matching over `1..=n`
//! - `UNSTABLE (blocking pair: hospital <h>, student <s>)`
//!
//! ## Search Order
//!
//! The blocking-pair scan walks hospitals in ascending id and, for each,
//! students in ascending id. The first pair found is the one reported, so the
//! diagnostic is reproducible.
//!
//! ## Complexity
//!
//! Structural check O(n), rank tables O(n^2), scan O(n^2).

use std::fmt;

use tracing::debug;

use crate::engine::RankTable;
use crate::error::MatchingError;
use crate::types::{CandidateMatching, Instance, Matching, Side};

// ============================================================================
// BlockingPair / Verdict
// ============================================================================

/// A hospital and student who both prefer each other to their partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockingPair {
    /// 1-based hospital id
    pub hospital: usize,
    /// 1-based student id
    pub student: usize,
}

impl fmt::Display for BlockingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hospital {}, student {}", self.hospital, self.student)
    }
}

/// Classification of a candidate matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Perfect matching with no blocking pair
    Stable,
    /// Not a perfect matching
    Invalid(MatchingError),
    /// Perfect matching with a blocking pair
    Unstable(BlockingPair),
}

impl Verdict {
    /// True unless the candidate was rejected as INVALID
    pub fn is_valid(&self) -> bool {
        !matches!(self, Verdict::Invalid(_))
    }

    /// True only for a valid, stable matching
    pub fn is_stable(&self) -> bool {
        matches!(self, Verdict::Stable)
    }

    /// The blocking pair, if the verdict is UNSTABLE
    pub fn blocking_pair(&self) -> Option<BlockingPair> {
        match self {
            Verdict::Unstable(pair) => Some(*pair),
            _ => None,
        }
    }

    /// Human-readable detail, same text as `Display`
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Stable => f.write_str("VALID STABLE"),
            Verdict::Invalid(reason) => write!(f, "INVALID ({reason})"),
            Verdict::Unstable(pair) => write!(f, "UNSTABLE (blocking pair: {pair})"),
        }
    }
}

impl From<MatchingError> for Verdict {
    fn from(err: MatchingError) -> Self {
        Verdict::Invalid(err)
    }
}

// ============================================================================
// Structural check
// ============================================================================

/// Check that `candidate` is a perfect matching over `1..=n`.
///
/// Checks run in a fixed order and stop at the first failure: entry count,
/// then each entry in supplied order (hospital range, student range,
/// duplicate hospital), then unmatched hospitals, then students matched more
/// than once, then unmatched students.
pub fn validate(candidate: &CandidateMatching, n: usize) -> Result<Matching, MatchingError> {
    if n == 0 {
        return if candidate.is_empty() {
            Ok(Matching::default())
        } else {
            Err(MatchingError::NotEmpty)
        };
    }

    if candidate.len() != n {
        return Err(MatchingError::WrongEntryCount {
            expected: n,
            found: candidate.len(),
        });
    }

    let in_range = |id: i64| id >= 1 && id <= n as i64;

    // 0 = unassigned
    let mut students = vec![0u32; n];
    for pair in candidate.iter() {
        if !in_range(pair.hospital) {
            return Err(MatchingError::HospitalOutOfRange(pair.hospital));
        }
        if !in_range(pair.student) {
            return Err(MatchingError::StudentOutOfRange(pair.student));
        }
        let slot = &mut students[(pair.hospital - 1) as usize];
        if *slot != 0 {
            return Err(MatchingError::DuplicateHospital(pair.hospital as usize));
        }
        *slot = pair.student as u32;
    }

    if let Some(h) = students.iter().position(|&s| s == 0) {
        return Err(MatchingError::UnmatchedHospital(h + 1));
    }

    let mut student_seen = vec![false; n];
    for &s in &students {
        let seen = &mut student_seen[s as usize - 1];
        if *seen {
            return Err(MatchingError::StudentMatchedMultiple(s as usize));
        }
        *seen = true;
    }

    if let Some(s) = student_seen.iter().position(|&seen| !seen) {
        return Err(MatchingError::UnmatchedStudent(s + 1));
    }

    Ok(Matching::from_bijection(students))
}

// ============================================================================
// Stability search
// ============================================================================

/// First blocking pair of a perfect matching, in ascending (hospital, student) order.
pub fn find_blocking_pair(instance: &Instance, matching: &Matching) -> Option<BlockingPair> {
    let n = instance.n();
    let hospital_ranks = RankTable::build(instance.prefs(Side::Hospital));
    let student_ranks = RankTable::build(instance.prefs(Side::Student));

    let students = matching.students();
    let mut partner_of_student = vec![0usize; n];
    for (h, &s) in students.iter().enumerate() {
        partner_of_student[s as usize - 1] = h;
    }

    for h in 0..n {
        let s_current = students[h] as usize - 1;
        for s in 0..n {
            if s == s_current {
                continue;
            }
            let h_current = partner_of_student[s];
            if hospital_ranks.prefers(h, s, s_current) && student_ranks.prefers(s, h, h_current) {
                return Some(BlockingPair {
                    hospital: h + 1,
                    student: s + 1,
                });
            }
        }
    }

    None
}

/// Classify `candidate` against `instance`.
///
/// # Example
///
/// ```
/// use stable_match::engine::{verify, BlockingPair, Verdict};
/// use stable_match::types::{CandidateMatching, Instance};
///
/// let instance = Instance::ordered(2);
/// let candidate = CandidateMatching::from(vec![(1, 2), (2, 1)]);
///
/// let verdict = verify(&instance, &candidate);
/// assert_eq!(verdict, Verdict::Unstable(BlockingPair { hospital: 1, student: 1 }));
/// assert_eq!(verdict.to_string(), "UNSTABLE (blocking pair: hospital 1, student 1)");
/// ```
pub fn verify(instance: &Instance, candidate: &CandidateMatching) -> Verdict {
    let verdict = match validate(candidate, instance.n()) {
        Err(reason) => Verdict::Invalid(reason),
        Ok(matching) => verify_matching(instance, &matching),
    };

    debug!(n = instance.n(), %verdict, "verification finished");
    verdict
}

/// Stability check for a perfect matching.
///
/// A matching sized for a different instance is `INVALID`.
pub fn verify_matching(instance: &Instance, matching: &Matching) -> Verdict {
    if matching.len() != instance.n() {
        return Verdict::Invalid(MatchingError::WrongEntryCount {
            expected: instance.n(),
            found: matching.len(),
        });
    }
    match find_blocking_pair(instance, matching) {
        Some(pair) => Verdict::Unstable(pair),
        None => Verdict::Stable,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
