//! Passport field extraction module.

mod normalize;
mod parser;
pub mod rules;

pub use normalize::{CandidateLine, LineNormalizer};
pub use parser::{ExtractionResult, FieldMatches, PassportParser};

use crate::error::ExtractionError;
use crate::models::passport::PassportRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for passport field extractors.
pub trait PassportExtractor {
    /// Extract passport data from recognized text.
    fn extract(&self, text: &str) -> Result<PassportRecord>;
}
