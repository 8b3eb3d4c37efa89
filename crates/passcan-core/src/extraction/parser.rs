//! Extraction coordinator: normalize, match, apply the completeness policy.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::passport::{Field, PassportRecord};

use super::normalize::{CandidateLine, LineNormalizer};
use super::rules::{
    CountryCodeMatcher, DateOfBirthMatcher, FieldMatch, FieldMatcher, FullNameMatcher,
    PassportNumberMatcher,
};
use super::{PassportExtractor, Result};

/// Per-field matches, kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldMatches {
    pub passport_number: Option<FieldMatch>,
    pub full_name: Option<FieldMatch>,
    pub date_of_birth: Option<FieldMatch>,
    pub country_code: Option<FieldMatch>,
}

impl FieldMatches {
    /// Run every matcher over the same lines.
    pub fn find(lines: &[CandidateLine]) -> Self {
        Self {
            passport_number: PassportNumberMatcher::new().find(lines),
            full_name: FullNameMatcher::new().find(lines),
            date_of_birth: DateOfBirthMatcher::new().find(lines),
            country_code: CountryCodeMatcher::new().find(lines),
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldMatch> {
        match field {
            Field::PassportNumber => self.passport_number.as_ref(),
            Field::FullName => self.full_name.as_ref(),
            Field::DateOfBirth => self.date_of_birth.as_ref(),
            Field::CountryCode => self.country_code.as_ref(),
        }
    }

    /// Mandatory fields that were not matched.
    pub fn missing_mandatory(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_mandatory())
            .filter(|field| {
                self.get(*field)
                    .is_none_or(|found| found.value.is_empty())
            })
            .collect()
    }

    fn to_record(&self) -> PassportRecord {
        let value = |found: &Option<FieldMatch>| {
            found
                .as_ref()
                .map(|m| m.value.clone())
                .unwrap_or_default()
        };

        PassportRecord {
            full_name: value(&self.full_name),
            date_of_birth: value(&self.date_of_birth),
            passport_number: value(&self.passport_number),
            country_code: value(&self.country_code),
        }
    }
}

/// Successful extraction with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted passport data.
    pub record: PassportRecord,
    /// Where each field came from.
    pub matches: FieldMatches,
    /// Number of lines that survived normalization.
    pub candidate_lines: usize,
}

/// Rule-based passport parser.
///
/// Stateless apart from its settings: every call works on its own input and
/// the compiled patterns are shared read-only, so one parser can serve many
/// threads.
#[derive(Debug, Clone, Default)]
pub struct PassportParser {
    normalizer: LineNormalizer,
}

impl PassportParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            normalizer: LineNormalizer::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_min_line_length(config.min_line_length)
    }

    /// Set the minimum candidate line length.
    pub fn with_min_line_length(mut self, min_length: usize) -> Self {
        self.normalizer = self.normalizer.with_min_length(min_length);
        self
    }

    pub fn min_line_length(&self) -> usize {
        self.normalizer.min_length()
    }

    /// Extract passport data, keeping track of where each field came from.
    pub fn extract_detailed(&self, text: &str) -> Result<ExtractionResult> {
        let lines = self.normalizer.normalize(text);
        debug!(
            "Normalized {} characters into {} candidate lines",
            text.len(),
            lines.len()
        );

        if lines.is_empty() {
            return Err(ExtractionError::NoDataFound);
        }

        let matches = FieldMatches::find(&lines);
        for field in Field::ALL {
            match matches.get(field) {
                Some(found) => trace!(%field, line = found.line, value = %found.value, "matched"),
                None => trace!(%field, "not matched"),
            }
        }

        let missing = matches.missing_mandatory();
        if !missing.is_empty() {
            debug!(?missing, "Mandatory fields not found");
            return Err(ExtractionError::NoDataFound);
        }

        Ok(ExtractionResult {
            record: matches.to_record(),
            matches,
            candidate_lines: lines.len(),
        })
    }
}

impl PassportExtractor for PassportParser {
    fn extract(&self, text: &str) -> Result<PassportRecord> {
        self.extract_detailed(text).map(|result| result.record)
    }
}
