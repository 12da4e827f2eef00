//! Hospital-proposing deferred acceptance (Gale–Shapley).
//!
//! ## Run State
//!
//! Every run owns its own fixed-size arrays, indexed by 0-based identity:
//!
//! - `student_for[h]`: student held by hospital `h` (1-based id, 0 = free)
//! - `hospital_for[s]`: hospital held by student `s` (1-based id, 0 = free)
//! - `next_offer[h]`: position in `h`'s ranking of its next proposal
//!
//! ## Selection Rule
//!
//! The proposing hospital is always the lowest-index hospital that is free and
//! still has students left to propose to. Free hospitals sit in a `BTreeSet`,
//! so the pick is O(log n) instead of a linear scan while producing the same
//! sequence of proposals.
//!
//! ## Bounds
//!
//! `next_offer` only advances, so a run makes at most `n^2` proposals.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::engine::RankTable;
use crate::types::{Instance, Matching, Side};

// ============================================================================
// MatchOutcome
// ============================================================================

/// Result of a matcher run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// The stable matching found
    pub matching: Matching,

    /// Total proposals made, between `n` and `n^2` for `n >= 1`
    pub proposals: u64,
}

/// What a student did with one proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    /// Student was free and accepted
    Accepted,
    /// Student traded up; the 0-based hospital returned is free again
    Displaced(usize),
    /// Student kept its current hospital
    Rejected,
}

// ============================================================================
// DeferredAcceptance
// ============================================================================

/// One deferred-acceptance run over an instance.
#[derive(Debug)]
pub struct DeferredAcceptance<'a> {
    instance: &'a Instance,
    student_ranks: RankTable,
    student_for: Vec<u32>,
    hospital_for: Vec<u32>,
    next_offer: Vec<usize>,
    free: BTreeSet<usize>,
    proposals: u64,
}

impl<'a> DeferredAcceptance<'a> {
    /// Prepare a run: every hospital free, no offers made.
    pub fn new(instance: &'a Instance) -> Self {
        let n = instance.n();
        Self {
            instance,
            student_ranks: RankTable::build(instance.prefs(Side::Student)),
            student_for: vec![0; n],
            hospital_for: vec![0; n],
            next_offer: vec![0; n],
            free: (0..n).collect(),
            proposals: 0,
        }
    }

    /// Proposals made so far
    #[inline]
    pub fn proposals(&self) -> u64 {
        self.proposals
    }

    /// Lowest-index hospital that is free and has someone left to ask.
    ///
    /// Hospitals that ran out of students are dropped from the free set.
    pub fn next_proposer(&mut self) -> Option<usize> {
        let n = self.instance.n();
        while let Some(&h) = self.free.first() {
            if self.next_offer[h] < n {
                return Some(h);
            }
            self.free.remove(&h);
        }
        None
    }

    /// Hospital `h` (0-based) proposes to the next student on its list.
    ///
    /// Returns `None`, leaving the run untouched, when `h` is out of range,
    /// already holds a student or has proposed to every student.
    pub fn propose(&mut self, h: usize) -> Option<Proposal> {
        let n = self.instance.n();
        if h >= n || self.student_for[h] != 0 || self.next_offer[h] >= n {
            return None;
        }

        let student_id = self.instance.hospital_prefs(h + 1)[self.next_offer[h]];
        self.next_offer[h] += 1;
        self.proposals += 1;

        let s = student_id as usize - 1;
        let held = self.hospital_for[s];

        if held == 0 {
            self.hold(h, s);
            trace!(hospital = h + 1, student = student_id, "accepted");
            return Some(Proposal::Accepted);
        }

        let current = held as usize - 1;
        if self.student_ranks.prefers(s, h, current) {
            self.student_for[current] = 0;
            self.free.insert(current);
            self.hold(h, s);
            trace!(
                hospital = h + 1,
                student = student_id,
                displaced = held,
                "traded up"
            );
            Some(Proposal::Displaced(current))
        } else {
            trace!(hospital = h + 1, student = student_id, "rejected");
            Some(Proposal::Rejected)
        }
    }

    fn hold(&mut self, h: usize, s: usize) {
        self.student_for[h] = (s + 1) as u32;
        self.hospital_for[s] = (h + 1) as u32;
        self.free.remove(&h);
    }

    /// Propose until no hospital is both free and has candidates left.
    pub fn run(mut self) -> MatchOutcome {
        while let Some(h) = self.next_proposer() {
            self.propose(h);
        }

        debug!(
            n = self.instance.n(),
            proposals = self.proposals,
            "deferred acceptance converged"
        );

        MatchOutcome {
            matching: Matching::from_bijection(self.student_for),
            proposals: self.proposals,
        }
    }
}

/// Run hospital-proposing deferred acceptance to completion.
///
/// # Example
///
/// ```
/// use stable_match::engine::match_hospitals;
/// use stable_match::types::Instance;
///
/// let instance = Instance::new(
///     vec![vec![1, 2], vec![1, 2]],
///     vec![vec![2, 1], vec![2, 1]],
/// ).unwrap();
///
/// let outcome = match_hospitals(&instance);
/// assert_eq!(outcome.matching.student_of(2), Some(1));
/// assert_eq!(outcome.matching.student_of(1), Some(2));
/// assert_eq!(outcome.proposals, 3);
/// ```
pub fn match_hospitals(instance: &Instance) -> MatchOutcome {
    if instance.is_empty() {
        return MatchOutcome::default();
    }
    DeferredAcceptance::new(instance).run()
}

// ============================================================================
// Unit Tests
// ============================================================================
