//! Passport number matching.

use super::patterns::PASSPORT_NUMBER;
use super::{FieldMatch, FieldMatcher};
use crate::extraction::CandidateLine;
use crate::models::passport::Field;

/// Passport number matcher.
pub struct PassportNumberMatcher;

impl PassportNumberMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PassportNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for PassportNumberMatcher {
    fn field(&self) -> Field {
        Field::PassportNumber
    }

    fn match_line(&self, line: &str) -> Option<FieldMatch> {
        PASSPORT_NUMBER.find(line).map(|m| {
            FieldMatch::new(m.as_str(), m.as_str()).with_position(m.start(), m.end())
        })
    }
}

/// Find the first passport number in the candidate lines.
pub fn match_passport_number(lines: &[CandidateLine]) -> Option<String> {
    PassportNumberMatcher::new().find(lines).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(texts: &[&str]) -> Vec<CandidateLine> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| CandidateLine::new(i, *t))
            .collect()
    }

    #[test]
    fn test_match_in_mrz_line() {
        let found = PassportNumberMatcher::new()
            .match_line("A123456780UTO8504132M3001015<<<<<<<<<<<<<<04")
            .unwrap();
        assert_eq!(found.value, "A12345678");
        assert_eq!(found.position, (0, 9));
    }

    #[test]
    fn test_requires_uppercase_letter() {
        assert_eq!(
            match_passport_number(&lines(&["document number a12345678 issued"])),
            None
        );
    }

    #[test]
    fn test_requires_eight_digits() {
        assert_eq!(
            match_passport_number(&lines(&["document number A1234567 issued"])),
            None
        );
    }

    #[test]
    fn test_earlier_line_wins() {
        let found = PassportNumberMatcher::new()
            .find(&lines(&[
                "no number on this line at all, just text",
                "first number B11111111 on the second line",
                "second number C22222222 on the third line",
            ]))
            .unwrap();
        assert_eq!(found.value, "B11111111");
        assert_eq!(found.line, 1);
    }

    #[test]
    fn test_leftmost_in_line_wins() {
        assert_eq!(
            match_passport_number(&lines(&["X99999999 then A12345678 on one line"])),
            Some("X99999999".to_string())
        );
    }

    #[test]
    fn test_letter_inside_longer_run() {
        // Unanchored: the letter may be preceded by other letters.
        assert_eq!(
            match_passport_number(&lines(&["AB123456789 trailing text to pad it out"])),
            Some("B12345678".to_string())
        );
    }
}
