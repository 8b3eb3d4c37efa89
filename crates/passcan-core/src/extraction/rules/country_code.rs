//! Country code matching.
//!
//! Any three consecutive uppercase letters count. In practice this often
//! lands inside a name or the MRZ filler rather than on an ISO 3166 code.

use super::patterns::COUNTRY_CODE;
use super::{FieldMatch, FieldMatcher};
use crate::extraction::CandidateLine;
use crate::models::passport::Field;

/// Country code matcher.
pub struct CountryCodeMatcher;

impl CountryCodeMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CountryCodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMatcher for CountryCodeMatcher {
    fn field(&self) -> Field {
        Field::CountryCode
    }

    fn match_line(&self, line: &str) -> Option<FieldMatch> {
        COUNTRY_CODE.find(line).map(|m| {
            FieldMatch::new(m.as_str(), m.as_str()).with_position(m.start(), m.end())
        })
    }
}

/// Find the first country code in the candidate lines.
pub fn match_country_code(lines: &[CandidateLine]) -> Option<String> {
    CountryCodeMatcher::new().find(lines).map(|m| m.value)
}
