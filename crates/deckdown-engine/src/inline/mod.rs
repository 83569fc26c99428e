//! Inline tokenization: one line of raw text in, a flat ordered list of
//! styled segments out.
//!
//! Recognition is priority-based and greedy with a single-character
//! fallback, so the tokenizer is total over arbitrary strings; malformed
//! markup degrades to literal text instead of erroring.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Segment, SegmentKind};
