//! Full name matching.

use super::patterns::FULL_NAME;
use super::{FieldMatch, FieldMatcher};
use crate::extraction::CandidateLine;
use crate::models::passport::Field;

/// Full name matcher.
///
/// Picks up the first run of uppercase words. Headings such as
/// `PASSPORT PASSEPORT` will match just as well as a name; the matcher has no
/// way to tell them apart.
pub struct FullNameMatcher;

impl FullNameMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FullNameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for FullNameMatcher {
    fn field(&self) -> Field {
        Field::FullName
    }

    fn match_line(&self, line: &str) -> Option<FieldMatch> {
        FULL_NAME.find(line).map(|m| {
            FieldMatch::new(m.as_str().trim(), m.as_str()).with_position(m.start(), m.end())
        })
    }
}

/// Find the first full name in the candidate lines.
pub fn match_full_name(lines: &[CandidateLine]) -> Option<String> {
    FullNameMatcher::new().find(lines).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matched(line: &str) -> Option<String> {
        FullNameMatcher::new().match_line(line).map(|m| m.value)
    }

    #[test]
    fn test_uppercase_name() {
        assert_eq!(
            matched("JOHN MICHAEL SMITH"),
            Some("JOHN MICHAEL SMITH".to_string())
        );
    }

    #[test]
    fn test_lowercase_name_rejected() {
        assert_eq!(matched("john smith"), None);
        assert_eq!(matched("John Smith"), None);
    }

    #[test]
    fn test_single_word_rejected() {
        assert_eq!(matched("SMITH"), None);
        assert_eq!(matched("P<UTOSMITH<<JOHN<MICHAEL<<<<<<<<<<<<<<<<<<<<"), None);
    }

    #[test]
    fn test_single_letter_tokens_break_the_run() {
        assert_eq!(matched("JOHN A SMITH"), None);
        assert_eq!(
            matched("JOHN A SMITH JONES"),
            Some("SMITH JONES".to_string())
        );
    }

    #[test]
    fn test_embedded_in_line() {
        let found = FullNameMatcher::new()
            .match_line("Name of holder: JOHN MICHAEL SMITH")
            .unwrap();
        assert_eq!(found.value, "JOHN MICHAEL SMITH");
        assert_eq!(found.position, (16, 34));
    }

    #[test]
    fn test_double_space_splits() {
        assert_eq!(matched("JOHN  SMITH"), None);
    }

    #[test]
    fn test_tab_separator_accepted() {
        assert_eq!(matched("JOHN\tSMITH"), Some("JOHN\tSMITH".to_string()));
    }

    #[test]
    fn test_first_line_wins() {
        let lines = vec![
            CandidateLine::new(0, "nothing shouting here, all lower case"),
            CandidateLine::new(1, "Holder JANE DOE, born somewhere nice"),
            CandidateLine::new(2, "Holder JOHN SMITH, born somewhere else"),
        ];
        assert_eq!(match_full_name(&lines), Some("JANE DOE".to_string()));
    }
}
