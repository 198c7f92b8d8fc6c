use crate::code::{Code, CodeKind};
use std::fmt;

/// Statistics about one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of characters in the input text
    pub char_count: usize,
    /// Number of codes emitted
    pub code_count: usize,
    /// Number of emitted codes that refer to learned patterns
    pub pattern_codes: usize,
}

impl CompressionStats {
    /// Computes statistics for `text` and the codes it was encoded to.
    pub fn new(text: &str, codes: &[Code]) -> Self {
        Self {
            char_count: text.chars().count(),
            code_count: codes.len(),
            pattern_codes: codes
                .iter()
                .filter(|&&code| !CodeKind::of(code).is_literal())
                .count(),
        }
    }

    /// Returns characters per code, e.g. `2.5` for a 2.5:1 ratio.
    pub fn compression_ratio(&self) -> f64 {
        if self.code_count == 0 {
            0.0
        } else {
            self.char_count as f64 / self.code_count as f64
        }
    }

    /// Returns the code count as a percentage of the character count.
    ///
    /// Assumes a code and a character occupy the same space.
    pub fn size_percentage(&self) -> f64 {
        if self.char_count == 0 {
            0.0
        } else {
            (self.code_count as f64 / self.char_count as f64) * 100.0
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Compression details ===")?;
        writeln!(f, "Characters in input text: {}", self.char_count)?;
        writeln!(f, "Codes emitted: {}", self.code_count)?;
        writeln!(f, "Pattern codes: {}", self.pattern_codes)?;
        writeln!(f, "Compression ratio: {:.2}:1", self.compression_ratio())?;
        write!(f, "Size: {:.2}% of original", self.size_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::BEYOND_VALID_CHR;

    #[test]
    fn test_empty() {
        let stats = CompressionStats::new("", &[]);
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.code_count, 0);
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.size_percentage(), 0.0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let stats = CompressionStats::new("héé", &[104, 233, 233]);
        assert_eq!(stats.char_count, 3);
        assert_eq!(stats.pattern_codes, 0);
    }

    #[test]
    fn test_ratio() {
        let codes = [97, BEYOND_VALID_CHR, BEYOND_VALID_CHR + 1, BEYOND_VALID_CHR + 2];
        let stats = CompressionStats::new("aaaaaaaaaa", &codes);
        assert_eq!(stats.pattern_codes, 3);
        assert!((stats.compression_ratio() - 2.5).abs() < 1e-9);
        assert!((stats.size_percentage() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let stats = CompressionStats::new("abab", &[97, 98, BEYOND_VALID_CHR]);
        let text = stats.to_string();
        assert!(text.contains("Characters in input text: 4"));
        assert!(text.contains("Codes emitted: 3"));
        assert!(text.contains("Compression ratio: 1.33:1"));
        assert!(text.contains("Size: 75.00% of original"));
    }
}
