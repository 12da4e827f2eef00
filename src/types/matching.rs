//! Matchings: validated bijections and raw candidates.
//!
//! ## Types
//!
//! - [`Matching`]: a perfect matching, hospital `h` to student `s`, with the
//!   inverse view kept alongside. Only produced by the matcher or by the
//!   verifier's structural check, so it is always a bijection over `1..=n`.
//! - [`CandidateMatching`]: pairs as a caller supplied them. Nothing is
//!   checked; ids are signed so that `0` or `-1` reach the verifier intact.
//!
//! ## Matching Root
//!
//! [`Matching::root`] hashes the student ids in hospital order with SHA-256.
//! Two runs agree on the root iff they produced the same matching.

use sha2::{Digest, Sha256};

// ============================================================================
// Matching
// ============================================================================

/// A perfect matching between `n` hospitals and `n` students.
///
/// ## Example
///
/// ```
/// use stable_match::engine::match_hospitals;
/// use stable_match::types::Instance;
///
/// let outcome = match_hospitals(&Instance::ordered(2));
/// let matching = outcome.matching;
///
/// assert_eq!(matching.student_of(1), Some(1));
/// assert_eq!(matching.hospital_of(2), Some(2));
/// assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(1, 1), (2, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    /// `students[h]` is the 1-based student matched to hospital `h + 1`
    students: Vec<u32>,

    /// `hospitals[s]` is the 1-based hospital matched to student `s + 1`
    hospitals: Vec<u32>,
}

impl Matching {
    /// Build from a student assignment the caller knows to be a bijection.
    ///
    /// # Panics
    ///
    /// Panics if a student id is outside `1..=students.len()`
    pub(crate) fn from_bijection(students: Vec<u32>) -> Self {
        let mut hospitals = vec![0u32; students.len()];
        for (h, &s) in students.iter().enumerate() {
            hospitals[s as usize - 1] = (h + 1) as u32;
        }
        debug_assert!(hospitals.iter().all(|&h| h != 0), "assignment is not a bijection");
        Self { students, hospitals }
    }

    /// Number of matched pairs (equals `n`)
    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// True for the empty matching
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Student matched to hospital `hospital` (1-based)
    pub fn student_of(&self, hospital: usize) -> Option<usize> {
        let index = hospital.checked_sub(1)?;
        self.students.get(index).map(|&s| s as usize)
    }

    /// Hospital matched to student `student` (1-based)
    pub fn hospital_of(&self, student: usize) -> Option<usize> {
        let index = student.checked_sub(1)?;
        self.hospitals.get(index).map(|&h| h as usize)
    }

    /// Student ids indexed by `hospital - 1`
    #[inline]
    pub fn students(&self) -> &[u32] {
        &self.students
    }

    /// `(hospital, student)` pairs in ascending hospital order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.students
            .iter()
            .enumerate()
            .map(|(h, &s)| (h + 1, s as usize))
    }

    /// Unchecked copy of this matching, as a verifier input
    pub fn to_candidate(&self) -> CandidateMatching {
        self.pairs()
            .map(|(h, s)| CandidatePair::new(h as i64, s as i64))
            .collect()
    }

    /// SHA-256 over the student ids (u32 little-endian) in hospital order
    pub fn root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for &s in &self.students {
            hasher.update(s.to_le_bytes());
        }
        let result = hasher.finalize();

        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }
}

// ============================================================================
// CandidateMatching
// ============================================================================

/// One `hospital student` entry of a candidate matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidatePair {
    pub hospital: i64,
    pub student: i64,
}

impl CandidatePair {
    #[inline]
    pub fn new(hospital: i64, student: i64) -> Self {
        Self { hospital, student }
    }
}

/// An externally supplied matching, not yet checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateMatching {
    pairs: Vec<CandidatePair>,
}

impl CandidateMatching {
    /// Create an empty candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, hospital: i64, student: i64) {
        self.pairs.push(CandidatePair::new(hospital, student));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Entries in the order they were supplied
    pub fn iter(&self) -> impl Iterator<Item = &CandidatePair> {
        self.pairs.iter()
    }
}

impl FromIterator<CandidatePair> for CandidateMatching {
    fn from_iter<T: IntoIterator<Item = CandidatePair>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(i64, i64)>> for CandidateMatching {
    fn from(pairs: Vec<(i64, i64)>) -> Self {
        pairs
            .into_iter()
            .map(|(h, s)| CandidatePair::new(h, s))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
