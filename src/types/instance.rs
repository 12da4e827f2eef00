//! Preference instance for the Hospitals/Residents problem.
//!
//! ## Shape
//!
//! An instance of size `n` holds `n` hospital rankings over students and
//! `n` student rankings over hospitals. Every ranking is a permutation of
//! `1..=n`, most preferred first.
//!
//! ## Identities
//!
//! Identities are 1-based, as they appear in preference files. Engines index
//! internally with `id - 1`.

use std::fmt;

use crate::error::InstanceError;

// ============================================================================
// Side enum
// ============================================================================

/// Which side of the market a ranking or identity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Hospitals propose and rank students
    #[default]
    Hospital,
    /// Students accept or reject and rank hospitals
    Student,
}

impl Side {
    /// Lowercase label used in diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Side::Hospital => "hospital",
            Side::Student => "student",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Ranking check
// ============================================================================

/// Check that `ids` is a permutation of `1..=n`.
///
/// Length is checked first, then each id in list order for range and then
/// repetition, so the first offending id is the one reported.
///
/// # Arguments
///
/// * `side` - Side that owns the ranking
/// * `owner` - 1-based identity of the owner
/// * `ids` - The ranking, most preferred first
/// * `n` - Instance size
pub fn check_ranking<I>(side: Side, owner: usize, ids: &[I], n: usize) -> Result<(), InstanceError>
where
    I: Copy + Into<i64>,
{
    if ids.len() != n {
        return Err(InstanceError::WrongLength {
            side,
            owner,
            expected: n,
            found: ids.len(),
        });
    }

    let mut seen = vec![false; n];
    for &id in ids {
        let id: i64 = id.into();
        if id < 1 || id > n as i64 {
            return Err(InstanceError::OutOfRange { side, owner, id });
        }
        let slot = &mut seen[(id - 1) as usize];
        if *slot {
            return Err(InstanceError::Repeated { side, owner, id });
        }
        *slot = true;
    }

    Ok(())
}

// ============================================================================
// Instance struct
// ============================================================================

/// An immutable, validated preference instance.
///
/// ## Example
///
/// ```
/// use stable_match::types::Instance;
///
/// let instance = Instance::new(
///     vec![vec![1, 2], vec![2, 1]],
///     vec![vec![1, 2], vec![1, 2]],
/// ).unwrap();
///
/// assert_eq!(instance.n(), 2);
/// assert_eq!(instance.hospital_prefs(2), &[2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instance {
    n: usize,

    /// `hospital_prefs[h]` ranks students for hospital `h + 1`
    hospital_prefs: Vec<Vec<u32>>,

    /// `student_prefs[s]` ranks hospitals for student `s + 1`
    student_prefs: Vec<Vec<u32>>,
}

impl Instance {
    /// Build an instance, validating every ranking.
    ///
    /// The size `n` is the number of hospital lists; the student side must
    /// match it.
    pub fn new(
        hospital_prefs: Vec<Vec<u32>>,
        student_prefs: Vec<Vec<u32>>,
    ) -> Result<Self, InstanceError> {
        let n = hospital_prefs.len();
        if student_prefs.len() != n {
            return Err(InstanceError::WrongListCount {
                side: Side::Student,
                expected: n,
                found: student_prefs.len(),
            });
        }

        for (i, list) in hospital_prefs.iter().enumerate() {
            check_ranking(Side::Hospital, i + 1, list, n)?;
        }
        for (i, list) in student_prefs.iter().enumerate() {
            check_ranking(Side::Student, i + 1, list, n)?;
        }

        Ok(Self {
            n,
            hospital_prefs,
            student_prefs,
        })
    }

    /// Wrap rankings that already passed [`check_ranking`] one by one.
    pub(crate) fn from_checked(
        n: usize,
        hospital_prefs: Vec<Vec<u32>>,
        student_prefs: Vec<Vec<u32>>,
    ) -> Self {
        debug_assert_eq!(hospital_prefs.len(), n);
        debug_assert_eq!(student_prefs.len(), n);
        Self {
            n,
            hospital_prefs,
            student_prefs,
        }
    }

    /// The empty instance (`n = 0`)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Instance where every hospital and student ranks `1..=n` in order.
    ///
    /// Its unique stable matching is the identity `h -> h`.
    pub fn ordered(n: usize) -> Self {
        let ranking: Vec<u32> = (1..=n as u32).collect();
        Self {
            n,
            hospital_prefs: vec![ranking.clone(); n],
            student_prefs: vec![ranking; n],
        }
    }

    /// Side size
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// True when `n = 0`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Ranking of hospital `id` (1-based)
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `1..=n`
    #[inline]
    pub fn hospital_prefs(&self, id: usize) -> &[u32] {
        &self.hospital_prefs[id - 1]
    }

    /// Ranking of student `id` (1-based)
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `1..=n`
    #[inline]
    pub fn student_prefs(&self, id: usize) -> &[u32] {
        &self.student_prefs[id - 1]
    }

    /// All rankings of one side, indexed by `id - 1`
    #[inline]
    pub fn prefs(&self, side: Side) -> &[Vec<u32>] {
        match side {
            Side::Hospital => &self.hospital_prefs,
            Side::Student => &self.student_prefs,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
