//! Matching file format: one `hospital student` pair per non-blank line.
//!
//! Reading only checks the text shape. Range, duplicate and coverage checks
//! belong to [`validate`](crate::engine::validate), which reports through the
//! same [`MatchingError`] vocabulary.

use crate::error::MatchingError;
use crate::text::parse_id;
use crate::types::{CandidateMatching, Matching};

/// Read a candidate matching for an instance of size `n`.
///
/// `n = 0` requires text with no non-blank lines. Otherwise there must be
/// exactly `n` non-blank lines of two integers each.
///
/// # Example
///
/// ```
/// use stable_match::text::read_matching;
///
/// let candidate = read_matching("1 2\n\n2 1\n", 2).unwrap();
/// assert_eq!(candidate.len(), 2);
///
/// let err = read_matching("1 2 3\n2 1\n", 2).unwrap_err();
/// assert_eq!(err.to_string(), "line 1 must contain exactly 2 integers");
/// ```
pub fn read_matching(text: &str, n: usize) -> Result<CandidateMatching, MatchingError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if n == 0 {
        return if lines.is_empty() {
            Ok(CandidateMatching::new())
        } else {
            Err(MatchingError::NotEmpty)
        };
    }

    if lines.len() != n {
        return Err(MatchingError::WrongEntryCount {
            expected: n,
            found: lines.len(),
        });
    }

    let mut candidate = CandidateMatching::new();
    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[hospital, student] = tokens.as_slice() else {
            return Err(MatchingError::LineShape { line: line_no });
        };

        let non_integer = |_| MatchingError::NonInteger { line: line_no };
        let hospital = parse_id(hospital).map_err(non_integer)?;
        let student = parse_id(student).map_err(non_integer)?;
        candidate.push(hospital, student);
    }

    Ok(candidate)
}

/// Matching text: `h s` per line, ascending hospital id.
pub fn write_matching(matching: &Matching) -> String {
    matching
        .pairs()
        .map(|(h, s)| format!("{h} {s}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{match_hospitals, verify};
    use crate::types::{CandidatePair, Instance};

    #[test]
    fn test_read_valid() {
        let candidate = read_matching("  1 1\n2 2  \n\n3 3\n", 3).unwrap();
        let pairs: Vec<_> = candidate.iter().copied().collect();
        assert_eq!(
            pairs,
            vec![
                CandidatePair::new(1, 1),
                CandidatePair::new(2, 2),
                CandidatePair::new(3, 3)
            ]
        );
    }

    #[test]
    fn test_read_zero() {
        assert!(read_matching("", 0).unwrap().is_empty());
        assert!(read_matching("\n \n", 0).unwrap().is_empty());
        assert_eq!(read_matching("1 1\n", 0), Err(MatchingError::NotEmpty));
    }

    #[test]
    fn test_read_wrong_line_count() {
        assert_eq!(
            read_matching("1 1\n2 2\n", 3),
            Err(MatchingError::WrongEntryCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_read_bad_lines() {
        assert_eq!(
            read_matching("1 1\n2\n", 2),
            Err(MatchingError::LineShape { line: 2 })
        );
        assert_eq!(
            read_matching("1 a\n2 2\n", 2),
            Err(MatchingError::NonInteger { line: 1 })
        );
    }

    #[test]
    fn test_read_keeps_out_of_range_ids() {
        let candidate = read_matching("0 -1\n2 9\n", 2).unwrap();
        let first = candidate.iter().next().copied();
        assert_eq!(first, Some(CandidatePair::new(0, -1)));
    }

    #[test]
    fn test_read_huge_id_is_out_of_range() {
        let candidate = read_matching("99999999999999999999 1\n2 2\n", 2).unwrap();
        assert_eq!(
            candidate.iter().next().copied(),
            Some(CandidatePair::new(i64::MAX, 1))
        );

        let verdict = verify(&Instance::ordered(2), &candidate);
        assert_eq!(
            verdict.to_string(),
            format!("INVALID (hospital id {} is out of range)", i64::MAX)
        );
    }

    #[test]
    fn test_write_matching() {
        let outcome = match_hospitals(&Instance::ordered(3));
        assert_eq!(write_matching(&outcome.matching), "1 1\n2 2\n3 3\n");
        assert_eq!(write_matching(&Matching::default()), "");
    }
}
