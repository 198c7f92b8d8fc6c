//! Text to code encoding.
//!
//! The encoder loads the whole alphabet of the input into its dictionary before
//! scanning, then greedily matches the longest known fragment at the cursor, emits
//! its code, and learns that fragment extended by one character.

use crate::code::Code;
use crate::code_alloc::CodeAllocator;
use crate::stats::CompressionStats;
use ahash::AHashMap as HashMap;

/// Character-indexed view over a text.
///
/// Fragments are addressed by character positions and returned as slices of the
/// original text, so dictionary keys never allocate.
struct CharWindow<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> CharWindow<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Byte offset of the character at `index`, or the text length past the end.
    fn offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.text.len(), |&(offset, _)| offset)
    }

    /// Characters `from..to`.
    fn fragment(&self, from: usize, to: usize) -> &'a str {
        &self.text[self.offset(from)..self.offset(to)]
    }

    fn literal(&self, index: usize) -> Code {
        self.chars[index].1 as Code
    }
}

/// Fragment to code mapping built during one encoding.
pub(crate) struct EncodingDictionary<'a> {
    entries: HashMap<&'a str, Code>,
    alloc: CodeAllocator,
    seeded: usize,
}

impl<'a> EncodingDictionary<'a> {
    /// Creates a dictionary holding every distinct character of the window.
    fn seeded(window: &CharWindow<'a>) -> Self {
        let mut entries = HashMap::default();
        for index in 0..window.len() {
            entries
                .entry(window.fragment(index, index + 1))
                .or_insert_with(|| window.literal(index));
        }

        let seeded = entries.len();
        Self {
            entries,
            alloc: CodeAllocator::new(seeded),
            seeded,
        }
    }

    pub(crate) fn get(&self, fragment: &str) -> Option<Code> {
        self.entries.get(fragment).copied()
    }

    /// Adds a new pattern and returns its code.
    ///
    /// Panics once pattern codes would pass `Code::MAX`, which takes a text of more
    /// than `Code::MAX - BEYOND_VALID_CHR` characters.
    fn learn(&mut self, fragment: &'a str) -> Code {
        debug_assert!(!self.entries.contains_key(fragment));
        let code = self
            .alloc
            .code_for(self.entries.len())
            .expect("Pattern code space exhausted");
        self.entries.insert(fragment, code);
        code
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of patterns learned beyond the seeded alphabet.
    pub(crate) fn learned(&self) -> usize {
        self.entries.len() - self.seeded
    }
}

/// Runs the greedy scan, calling `on_learn` for every pattern added to the dictionary.
///
/// Returns the codes, the final dictionary size and the number of learned patterns.
pub(crate) fn scan(
    text: &str,
    mut on_learn: impl FnMut(Code, &str),
) -> (Vec<Code>, usize, usize) {
    let window = CharWindow::new(text);
    let mut dictionary = EncodingDictionary::seeded(&window);
    let len = window.len();

    let mut codes = Vec::new();
    let mut i = 0;
    while i < len {
        // Single characters are seeded, so the shortest match always succeeds.
        let mut matched = window.literal(i);
        let mut j = i + 2;
        while j <= len {
            match dictionary.get(window.fragment(i, j)) {
                Some(code) => {
                    matched = code;
                    j += 1;
                }
                None => break,
            }
        }

        codes.push(matched);

        // Running off the end of the text leaves nothing new to learn.
        if j <= len {
            let pattern = window.fragment(i, j);
            let code = dictionary.learn(pattern);
            on_learn(code, pattern);
        }

        i = j - 1;
    }

    (codes, dictionary.len(), dictionary.learned())
}

/// Configurable text encoder.
///
/// ```
/// use lzw_text::{Encoder, BEYOND_VALID_CHR};
///
/// let codes = Encoder::new().encode("ababab");
/// assert_eq!(codes, vec![97, 98, BEYOND_VALID_CHR, BEYOND_VALID_CHR]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    report_details: bool,
}

impl Encoder {
    /// Creates an encoder that reports its statistics at debug level only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the compression details of every encoding at info level.
    pub fn report_details(mut self, enabled: bool) -> Self {
        self.report_details = enabled;
        self
    }

    /// Encodes `text` into a sequence of codes.
    pub fn encode(&self, text: &str) -> Vec<Code> {
        self.encode_with_stats(text).0
    }

    /// Encodes `text` and returns the statistics of the encoding alongside.
    pub fn encode_with_stats(&self, text: &str) -> (Vec<Code>, CompressionStats) {
        let (codes, dictionary_len, learned) = scan(text, |code, pattern| {
            tracing::trace!(code, pattern, "learned pattern");
        });
        let stats = CompressionStats::new(text, &codes);

        if self.report_details {
            tracing::info!(
                chars = stats.char_count,
                codes = stats.code_count,
                ratio = format_args!("{:.2}:1", stats.compression_ratio()),
                percentage = format_args!("{:.2}%", stats.size_percentage()),
                "compression details"
            );
        } else {
            tracing::debug!(
                chars = stats.char_count,
                codes = stats.code_count,
                dictionary_len,
                learned,
                "encoded text"
            );
        }

        (codes, stats)
    }
}

/// Encodes `text` into a sequence of codes with the default [`Encoder`].
///
/// Decoding the result with [`decode`](crate::decode) yields `text` again.
pub fn encode(text: &str) -> Vec<Code> {
    Encoder::new().encode(text)
}

/// Encodes `text` and returns the statistics of the encoding alongside.
pub fn encode_with_stats(text: &str) -> (Vec<Code>, CompressionStats) {
    Encoder::new().encode_with_stats(text)
}
