//! Text formats read and written by the command line.
//!
//! - [`parse_instance`] / [`write_instance`]: preference files
//! - [`read_matching`] / [`write_matching`]: matching files
//!
//! The engines never see text; these functions turn it into [`Instance`]
//! and [`CandidateMatching`] values and back.
//!
//! [`Instance`]: crate::types::Instance
//! [`CandidateMatching`]: crate::types::CandidateMatching

use std::num::{IntErrorKind, ParseIntError};

mod instance;
mod matching;

pub use instance::{parse_instance, write_instance};
pub use matching::{read_matching, write_matching};

/// Parse an identity token.
///
/// Integers beyond `i64` clamp to `i64::MAX` / `i64::MIN` so they are
/// reported as out-of-range ids rather than as non-integers.
pub(crate) fn parse_id(token: &str) -> Result<i64, ParseIntError> {
    match token.parse::<i64>() {
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        parsed => parsed,
    }
}
