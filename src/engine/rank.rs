//! Rank tables: O(1) "how much does owner `o` like partner `p`".
//!
//! ## Layout
//!
//! One flat `Vec<u32>` of `n * n` cells, row-major by owner:
//!
//! ```text
//! ranks[owner * n + partner] = position of partner in owner's list
//! ```
//!
//! Both indices are 0-based. Rank 0 is the most preferred partner.
//!
//! Building a table is O(n^2) and reads each ranking once. The rankings must
//! already be permutations of `1..=n`; [`Instance`](crate::types::Instance)
//! guarantees that.

/// Inverted preference lists for one side of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankTable {
    n: usize,
    ranks: Vec<u32>,
}

impl RankTable {
    /// Invert `lists`, where `lists[o]` ranks 1-based partner ids for owner `o`.
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::engine::RankTable;
    ///
    /// let table = RankTable::build(&[vec![2, 1], vec![1, 2]]);
    ///
    /// assert_eq!(table.rank(0, 1), 0); // owner 1 likes partner 2 best
    /// assert_eq!(table.rank(0, 0), 1);
    /// assert!(table.prefers(1, 0, 1));
    /// ```
    pub fn build(lists: &[Vec<u32>]) -> Self {
        let n = lists.len();
        let mut ranks = vec![0u32; n * n];

        for (owner, list) in lists.iter().enumerate() {
            let row = &mut ranks[owner * n..(owner + 1) * n];
            for (position, &partner) in list.iter().enumerate() {
                row[partner as usize - 1] = position as u32;
            }
        }

        Self { n, ranks }
    }

    /// Number of owners (and partners)
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Rank of `partner` for `owner`, both 0-based. Lower is better.
    #[inline]
    pub fn rank(&self, owner: usize, partner: usize) -> u32 {
        self.ranks[owner * self.n + partner]
    }

    /// True if `owner` strictly prefers partner `a` to partner `b`
    #[inline]
    pub fn prefers(&self, owner: usize, a: usize, b: usize) -> bool {
        self.rank(owner, a) < self.rank(owner, b)
    }
}
