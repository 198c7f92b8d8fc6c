/// A code emitted by the encoder: either a literal character or a learned pattern.
pub type Code = u32;

/// One past the highest Unicode code point (`0x10FFFF + 1`).
///
/// Codes below this value are literals equal to a character's code point; codes at
/// or above it are learned patterns. Encoder and decoder must agree on this value,
/// so it is a constant rather than a setting.
pub const BEYOND_VALID_CHR: Code = 0x10FFFF + 1;

/// Classification of a code into the two disjoint code spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// A single character, carrying its code point.
    Literal(u32),

    /// A multi-character pattern, carrying its discovery index (0 for the first).
    Pattern(u32),
}

impl CodeKind {
    /// Classifies a code without consulting any dictionary.
    pub fn of(code: Code) -> Self {
        if code < BEYOND_VALID_CHR {
            CodeKind::Literal(code)
        } else {
            CodeKind::Pattern(code - BEYOND_VALID_CHR)
        }
    }

    /// Returns true for literal codes.
    pub fn is_literal(&self) -> bool {
        matches!(self, CodeKind::Literal(_))
    }

    /// Returns the literal's character.
    ///
    /// `None` for patterns and for surrogate code points, which are not `char`s.
    pub fn literal_char(&self) -> Option<char> {
        match *self {
            CodeKind::Literal(point) => char::from_u32(point),
            CodeKind::Pattern(_) => None,
        }
    }
}

impl From<char> for CodeKind {
    fn from(ch: char) -> Self {
        CodeKind::Literal(ch as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_value() {
        assert_eq!(BEYOND_VALID_CHR, 1_114_112);
        assert_eq!(BEYOND_VALID_CHR, char::MAX as u32 + 1);
    }

    #[test]
    fn test_classify_literal() {
        assert_eq!(CodeKind::of(97), CodeKind::Literal(97));
        assert_eq!(CodeKind::of(97).literal_char(), Some('a'));
        assert_eq!(CodeKind::of(char::MAX as u32).literal_char(), Some(char::MAX));
        assert!(CodeKind::of(0).is_literal());
    }

    #[test]
    fn test_classify_pattern() {
        assert_eq!(CodeKind::of(BEYOND_VALID_CHR), CodeKind::Pattern(0));
        assert_eq!(CodeKind::of(BEYOND_VALID_CHR + 5), CodeKind::Pattern(5));
        assert!(!CodeKind::of(BEYOND_VALID_CHR).is_literal());
        assert_eq!(CodeKind::of(BEYOND_VALID_CHR).literal_char(), None);
    }

    #[test]
    fn test_surrogate_is_not_a_char() {
        let kind = CodeKind::of(0xD800);
        assert!(kind.is_literal());
        assert_eq!(kind.literal_char(), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(CodeKind::from('é'), CodeKind::Literal(0xE9));
    }
}
