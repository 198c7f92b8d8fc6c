//! Code to text decoding.
//!
//! The decoder only knows the literals that appear in the code sequence, seeds
//! those first, and then rebuilds each learned pattern as the current fragment
//! plus the first character of the fragment that follows it.

use crate::code::{Code, CodeKind};
use crate::code_alloc::CodeAllocator;
use crate::error::{DecodeError, Result};
use ahash::AHashMap as HashMap;

/// Code to fragment mapping built during one decoding.
pub(crate) struct DecodingDictionary {
    entries: HashMap<Code, String>,
    alloc: CodeAllocator,
}

impl DecodingDictionary {
    /// Creates a dictionary holding every literal that occurs in `codes`.
    fn seeded(codes: &[Code]) -> Result<Self> {
        let mut entries = HashMap::default();
        for (position, &code) in codes.iter().enumerate() {
            let kind = CodeKind::of(code);
            if !kind.is_literal() || entries.contains_key(&code) {
                continue;
            }
            let ch = kind
                .literal_char()
                .ok_or(DecodeError::InvalidLiteral { code, position })?;
            entries.insert(code, ch.to_string());
        }

        let alloc = CodeAllocator::new(entries.len());
        Ok(Self { entries, alloc })
    }

    pub(crate) fn get(&self, code: Code) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Adds a new pattern and returns its code.
    ///
    /// `None` once pattern codes would pass `Code::MAX`.
    fn learn(&mut self, fragment: String) -> Option<Code> {
        let code = self.alloc.code_for(self.entries.len())?;
        debug_assert!(!self.entries.contains_key(&code));
        self.entries.insert(code, fragment);
        Some(code)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Text decoder.
///
/// ```
/// use lzw_text::{Decoder, BEYOND_VALID_CHR};
///
/// let text = Decoder::new()
///     .decode(&[97, 98, BEYOND_VALID_CHR, BEYOND_VALID_CHR])
///     .unwrap();
/// assert_eq!(text, "ababab");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder;

impl Decoder {
    /// Creates a decoder for codes built on `BEYOND_VALID_CHR`.
    pub fn new() -> Self {
        Self
    }

    /// Decodes a code sequence produced by a compatible encoder.
    ///
    /// Fails on the first code that is neither a valid literal nor a pattern
    /// learned so far; no partial text is returned.
    pub fn decode(&self, codes: &[Code]) -> Result<String> {
        let (output, dictionary) = walk(codes)?;

        tracing::debug!(
            codes = codes.len(),
            chars = output.chars().count(),
            dictionary_len = dictionary.len(),
            "decoded text"
        );

        Ok(output)
    }
}

/// Decodes `codes` and returns the text together with the final dictionary.
fn walk(codes: &[Code]) -> Result<(String, DecodingDictionary)> {
    let mut dictionary = DecodingDictionary::seeded(codes)?;
    let mut output = String::new();

    for (position, &code) in codes.iter().enumerate() {
        let current = dictionary
            .get(code)
            .ok_or(DecodeError::UnknownCode { code, position })?
            .to_owned();
        output.push_str(&current);

        let Some(&next) = codes.get(position + 1) else {
            break;
        };

        // An unknown next code is the pattern this step is about to define,
        // which starts with the current fragment's first character.
        let continuation = match dictionary.get(next) {
            Some(fragment) => fragment.chars().next(),
            None => current.chars().next(),
        };

        // Literals hold one character and patterns at least two.
        let ch = continuation.expect("Decoded fragments are never empty");

        let mut pattern = current;
        pattern.push(ch);
        let learned = dictionary
            .learn(pattern)
            .ok_or(DecodeError::CodeSpaceExhausted { position })?;
        tracing::trace!(code = learned, "learned pattern");
    }

    Ok((output, dictionary))
}

/// Decodes a code sequence with the default [`Decoder`].
///
/// ```
/// use lzw_text::{decode, encode};
///
/// let codes = encode("hello, hello");
/// assert_eq!(decode(&codes).unwrap(), "hello, hello");
/// ```
pub fn decode(codes: &[Code]) -> Result<String> {
    Decoder::new().decode(codes)
}
