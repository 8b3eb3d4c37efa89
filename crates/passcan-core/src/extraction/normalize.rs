//! Splitting raw OCR text into candidate lines.

use std::fmt;

use crate::models::config::DEFAULT_MIN_LINE_LENGTH;

/// A trimmed line of OCR output long enough to carry field information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    index: usize,
    text: String,
}

impl CandidateLine {
    /// Create a candidate line from its position in the source text.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Zero-based index of the line in the source text, counting discarded lines.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for CandidateLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CandidateLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Filters OCR noise out of raw text.
///
/// Meaningful document lines (name blocks, MRZ lines) tend to be long while
/// OCR noise produces short fragments, so anything shorter than the minimum
/// length is dropped.
#[derive(Debug, Clone)]
pub struct LineNormalizer {
    min_length: usize,
}

impl LineNormalizer {
    /// Create a normalizer with the default minimum line length.
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LINE_LENGTH,
        }
    }

    /// Set the minimum line length, in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Split text on line breaks, trim each line and keep the long ones in order.
    pub fn normalize(&self, text: &str) -> Vec<CandidateLine> {
        text.lines()
            .flat_map(|line| line.split('\r'))
            .enumerate()
            .map(|(index, line)| (index, line.trim()))
            .filter(|(_, line)| !line.is_empty() && line.chars().count() >= self.min_length)
            .map(|(index, line)| CandidateLine::new(index, line))
            .collect()
    }
}

impl Default for LineNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MRZ_1: &str = "P<UTOSMITH<<JOHN<MICHAEL<<<<<<<<<<<<<<<<<<<<";
    const MRZ_2: &str = "A123456780UTO8504132M3001015<<<<<<<<<<<<<<04";

    #[test]
    fn test_short_input_yields_nothing() {
        let normalizer = LineNormalizer::new();
        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("PASSPORT").is_empty());
        assert!(normalizer.normalize("short\nlines\nonly\n").is_empty());
    }

    #[test]
    fn test_keeps_long_lines_in_order() {
        let text = format!("PASSPORT\n{MRZ_1}\nnoise\n{MRZ_2}\n");
        let lines = LineNormalizer::new().normalize(&text);

        assert_eq!(
            lines,
            vec![CandidateLine::new(1, MRZ_1), CandidateLine::new(3, MRZ_2)]
        );
    }

    #[test]
    fn test_trims_before_measuring() {
        // 29 characters padded with whitespace must still be rejected.
        let short = format!("   {}   ", "X".repeat(29));
        let exact = format!("\t{}  ", "X".repeat(30));
        let lines = LineNormalizer::new().normalize(&format!("{short}\n{exact}"));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_str(), "X".repeat(30));
        assert_eq!(lines[0].index(), 1);
    }

    #[test]
    fn test_handles_crlf_and_bare_cr() {
        let text = format!("{MRZ_1}\r\n{MRZ_2}\r{MRZ_1}");
        let lines = LineNormalizer::new().normalize(&text);

        let texts: Vec<&str> = lines.iter().map(|l| l.as_str()).collect();
        assert_eq!(texts, vec![MRZ_1, MRZ_2, MRZ_1]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 15 two-byte characters: 30 bytes but only 15 characters.
        let text = "É".repeat(15);
        assert!(LineNormalizer::new().normalize(&text).is_empty());
        assert_eq!(
            LineNormalizer::new().with_min_length(15).normalize(&text).len(),
            1
        );
    }

    #[test]
    fn test_zero_min_length_still_drops_blank_lines() {
        let lines = LineNormalizer::new()
            .with_min_length(0)
            .normalize("a\n\n   \nb");
        assert_eq!(lines, vec![CandidateLine::new(0, "a"), CandidateLine::new(3, "b")]);
    }
}
