//! # lzw-text - Dictionary-Based Text Codec
//!
//! An LZW-style codec that turns text into a sequence of integer codes and back.
//!
//! Both directions build a substitution dictionary during a single left-to-right
//! scan. The code space is split in two:
//! 1. **Literals**: a single character is encoded as its own code point
//! 2. **Patterns**: learned multi-character fragments get codes starting at
//!    [`BEYOND_VALID_CHR`], one past the highest code point
//!
//! so any code can be classified without a flag (see [`CodeKind`]).
//!
//! ## Example
//!
//! ```
//! use lzw_text::{decode, encode, BEYOND_VALID_CHR};
//!
//! let codes = encode("ababab");
//! assert_eq!(codes, vec![97, 98, BEYOND_VALID_CHR, BEYOND_VALID_CHR]);
//!
//! // Lossless reconstruction
//! assert_eq!(decode(&codes).unwrap(), "ababab");
//! ```
//!
//! Packing the codes into bytes is left to the caller.

mod code;
mod code_alloc;
mod decoder;
mod encoder;
mod error;
mod stats;


pub use code::{Code, CodeKind, BEYOND_VALID_CHR};
pub use decoder::{decode, Decoder};
pub use encoder::{encode, encode_with_stats, Encoder};
pub use error::{DecodeError, Result};
pub use stats::CompressionStats;
