//! Preference file format.
//!
//! ```text
//! n
//! <hospital 1 ranking>
//! ...
//! <hospital n ranking>
//! <student 1 ranking>
//! ...
//! <student n ranking>
//! ```
//!
//! Rankings are whitespace-separated permutations of `1..=n`. Blank lines are
//! skipped and every line number in a [`ParseError`] counts non-blank lines.

use crate::error::ParseError;
use crate::text::parse_id;
use crate::types::{check_ranking, Instance, Side};

/// Parse preference text into a validated [`Instance`].
///
/// # Example
///
/// ```
/// use stable_match::text::parse_instance;
///
/// let instance = parse_instance("2\n1 2\n2 1\n\n1 2\n1 2\n").unwrap();
/// assert_eq!(instance.n(), 2);
/// assert_eq!(instance.hospital_prefs(2), &[2, 1]);
///
/// let err = parse_instance("2\n1 1\n2 1\n1 2\n2 1\n").unwrap_err();
/// assert_eq!(err.to_string(), "line 2: hospital 1 repeats id 1");
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let header = lines.first().ok_or(ParseError::Empty)?;
    let mut header_tokens = header.split_whitespace();
    let (Some(token), None) = (header_tokens.next(), header_tokens.next()) else {
        return Err(ParseError::HeaderShape);
    };
    let n: i64 = token.parse().map_err(|_| ParseError::HeaderNotInteger)?;
    if n < 0 {
        return Err(ParseError::NegativeSize);
    }
    let n = n as usize;

    let expected = n.saturating_mul(2).saturating_add(1);
    if lines.len() != expected {
        return Err(ParseError::LineCount {
            expected,
            found: lines.len(),
        });
    }

    let hospital_prefs = parse_block(&lines[1..=n], Side::Hospital, 2, n)?;
    let student_prefs = parse_block(&lines[1 + n..], Side::Student, 2 + n, n)?;

    Ok(Instance::from_checked(n, hospital_prefs, student_prefs))
}

/// Parse `n` ranking lines for one side; `first_line` is the line number of the first.
///
/// Each line goes through [`check_ranking`] so errors carry their line.
fn parse_block(
    lines: &[&str],
    side: Side,
    first_line: usize,
    n: usize,
) -> Result<Vec<Vec<u32>>, ParseError> {
    let mut block = Vec::with_capacity(n);

    for (i, line) in lines.iter().enumerate() {
        let line_no = first_line + i;
        let ids = line
            .split_whitespace()
            .map(parse_id)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseError::NonInteger { line: line_no })?;

        check_ranking(side, i + 1, &ids, n).map_err(|reason| ParseError::Preference {
            line: line_no,
            reason,
        })?;

        block.push(ids.into_iter().map(|id| id as u32).collect());
    }

    Ok(block)
}

/// Canonical preference text for `instance`.
///
/// `parse_instance(&write_instance(&i))` gives back `i`.
pub fn write_instance(instance: &Instance) -> String {
    let mut out = format!("{}\n", instance.n());
    for side in [Side::Hospital, Side::Student] {
        for list in instance.prefs(side) {
            let line: Vec<String> = list.iter().map(u32::to_string).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
    }
    out
}
