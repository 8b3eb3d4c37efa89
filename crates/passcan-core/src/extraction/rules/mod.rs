//! Heuristic field matchers for passport OCR text.
//!
//! Every matcher scans candidate lines top to bottom and stops at the first
//! line containing its pattern. Within a line the leftmost match wins. There
//! is no scoring and no cross-field validation, and a single line may feed
//! several fields.

pub mod country_code;
pub mod date_of_birth;
pub mod full_name;
pub mod passport_number;
pub mod patterns;

pub use country_code::{match_country_code, CountryCodeMatcher};
pub use date_of_birth::{format_mrz_date, match_date_of_birth, DateOfBirthMatcher};
pub use full_name::{match_full_name, FullNameMatcher};
pub use passport_number::{match_passport_number, PassportNumberMatcher};
pub use patterns::*;

use serde::Serialize;

use super::CandidateLine;
use crate::models::passport::Field;

/// Trait for field matchers.
pub trait FieldMatcher {
    /// The field this matcher produces.
    fn field(&self) -> Field;

    /// Match the field within a single line.
    fn match_line(&self, line: &str) -> Option<FieldMatch>;

    /// Return the first match in document order.
    fn find(&self, lines: &[CandidateLine]) -> Option<FieldMatch> {
        lines.iter().find_map(|line| {
            self.match_line(line.as_str())
                .map(|found| found.on_line(line.index()))
        })
    }
}

/// A matched field value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    /// Post-processed value.
    pub value: String,
    /// Source text that was matched.
    pub source: String,
    /// Index of the source line in the raw text.
    pub line: usize,
    /// Byte span of the match within its line.
    pub position: (usize, usize),
}

impl FieldMatch {
    pub fn new(value: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: source.into(),
            line: 0,
            position: (0, 0),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = (start, end);
        self
    }

    pub fn on_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchers_report_their_field() {
        let matchers: [&dyn FieldMatcher; 4] = [
            &PassportNumberMatcher,
            &FullNameMatcher,
            &DateOfBirthMatcher,
            &CountryCodeMatcher,
        ];
        let fields: Vec<Field> = matchers.iter().map(|m| m.field()).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_find_records_source_line() {
        let lines = vec![
            CandidateLine::new(2, "lower case only, nothing to see here"),
            CandidateLine::new(7, "holder JANE DOE of state UTO, number Z00000001"),
        ];

        for matcher in [
            &PassportNumberMatcher as &dyn FieldMatcher,
            &FullNameMatcher,
            &CountryCodeMatcher,
        ] {
            let found = matcher.find(&lines).unwrap();
            assert_eq!(found.line, 7, "{}", matcher.field());
        }
        assert!(DateOfBirthMatcher.find(&lines).is_none());
    }
}
