//! Date of birth matching.
//!
//! Any six-digit run shaped like `YYMMDD` is accepted, whatever it actually
//! is. No century is inferred and the day is not checked against the month.

use super::patterns::DATE_OF_BIRTH;
use super::{FieldMatch, FieldMatcher};
use crate::extraction::CandidateLine;
use crate::models::passport::Field;

/// Date of birth matcher.
pub struct DateOfBirthMatcher;

impl DateOfBirthMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateOfBirthMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for DateOfBirthMatcher {
    fn field(&self) -> Field {
        Field::DateOfBirth
    }

    fn match_line(&self, line: &str) -> Option<FieldMatch> {
        let m = DATE_OF_BIRTH.find(line)?;
        let value = format_mrz_date(m.as_str())?;

        Some(FieldMatch::new(value, m.as_str()).with_position(m.start(), m.end()))
    }
}

/// Find the first date of birth in the candidate lines.
pub fn match_date_of_birth(lines: &[CandidateLine]) -> Option<String> {
    DateOfBirthMatcher::new().find(lines).map(|m| m.value)
}

/// Format a `YYMMDD` run as `YY/MM/DD`.
///
/// Returns `None` unless the input is exactly six ASCII digits.
pub fn format_mrz_date(date: &str) -> Option<String> {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}/{}/{}", &date[0..2], &date[2..4], &date[4..6]))
}
