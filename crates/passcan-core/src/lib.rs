//! Core library for passport OCR text processing.
//!
//! This crate provides:
//! - Line normalization of raw OCR output into candidate lines
//! - Heuristic field matchers (passport number, full name, date of birth, country code)
//! - A coordinator that assembles a [`PassportRecord`] or reports that no data was found
//!
//! The matchers are deliberately permissive, first-match-wins pattern searches.
//! They approximate the machine-readable zone without parsing it.

pub mod error;
pub mod extraction;
pub mod models;

pub use error::{ExtractionError, PassCanError, Result};
pub use extraction::{
    CandidateLine, ExtractionResult, FieldMatches, LineNormalizer, PassportExtractor,
    PassportParser,
};
pub use models::config::{ExtractionConfig, OutputConfig, PassCanConfig};
pub use models::passport::{Field, PassportRecord};
