//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PassCanError, Result};

/// Default minimum length (in characters) of a candidate line.
pub const DEFAULT_MIN_LINE_LENGTH: usize = 30;

/// Main configuration for passcan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassCanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output formatting configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lines shorter than this (after trimming) are treated as OCR noise.
    pub min_line_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
        }
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl PassCanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.check()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the extraction pipeline cannot work with.
    pub fn check(&self) -> Result<()> {
        if self.extraction.min_line_length == 0 {
            return Err(PassCanError::Config(
                "extraction.min_line_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PassCanConfig::default();
        assert_eq!(config.extraction.min_line_length, 30);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PassCanConfig =
            serde_json::from_str(r#"{"extraction": {"min_line_length": 20}}"#).unwrap();
        assert_eq!(config.extraction.min_line_length, 20);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PassCanConfig::default();
        config.extraction.min_line_length = 25;
        config.output.pretty_json = false;
        config.save(&path).unwrap();

        let loaded = PassCanConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_zero_min_line_length_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"min_line_length": 0}}"#).unwrap();

        let err = PassCanConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, PassCanError::Config(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = PassCanConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, PassCanError::Json(_)));
    }
}
