//! Error types for decoding.

use crate::code::Code;
use thiserror::Error;

/// Result type alias using [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Reasons a code sequence cannot be decoded.
///
/// Raised for sequences that no compatible encoder could have produced. Decoding is
/// all-or-nothing: no partial text accompanies the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The code is neither a seeded literal nor a pattern learned so far.
    #[error("unknown code {code} at position {position}")]
    UnknownCode { code: Code, position: usize },

    /// The code is in the literal range but is not a Unicode scalar value.
    #[error("literal code {code} at position {position} is not a valid character")]
    InvalidLiteral { code: Code, position: usize },

    /// The sequence is too long for its pattern codes to fit in a [`Code`].
    #[error("pattern code space exhausted at position {position}")]
    CodeSpaceExhausted { position: usize },
}

impl DecodeError {
    /// Position in the input sequence of the offending code.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::UnknownCode { position, .. }
            | DecodeError::InvalidLiteral { position, .. }
            | DecodeError::CodeSpaceExhausted { position } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DecodeError::UnknownCode {
            code: 1_114_200,
            position: 4,
        };
        assert_eq!(err.to_string(), "unknown code 1114200 at position 4");

        let err = DecodeError::InvalidLiteral {
            code: 0xD800,
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "literal code 55296 at position 0 is not a valid character"
        );
    }

    #[test]
    fn test_code_space_exhausted() {
        let err = DecodeError::CodeSpaceExhausted { position: 9 };
        assert_eq!(err.to_string(), "pattern code space exhausted at position 9");
        assert_eq!(err.position(), 9);
    }

    #[test]
    fn test_position() {
        let err = DecodeError::UnknownCode {
            code: 7,
            position: 12,
        };
        assert_eq!(err.position(), 12);
    }
}
