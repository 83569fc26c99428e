//! Slide splitting: partitions a document into per-slide chunks on
//! level-1 heading boundaries, skipping headings inside fenced code.
//!
//! Concatenating the returned chunks reproduces the document byte for
//! byte; nothing is lost or duplicated.

use crate::blocks::patterns::is_fence_marker;

/// Splits a document into an ordered, non-empty list of raw slide
/// chunks.
///
/// A chunk begins at any `#`-plus-whitespace line outside a fenced code
/// region. Fence state toggles on every fence-marker line; backtick
/// fences do not nest. Non-blank content before the first heading becomes
/// its own preamble chunk; blank-only preamble rides with the first
/// heading's chunk so the split stays lossless. Input with no headings
/// (including empty input) yields exactly one chunk.
pub fn split(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = vec![];
    let mut current = String::new();
    let mut in_fence = false;

    for line in text.split_inclusive('\n') {
        if !in_fence && is_slide_boundary(line) && !current.is_empty() {
            let blank_preamble = chunks.is_empty() && current.trim().is_empty();
            if !blank_preamble {
                chunks.push(std::mem::take(&mut current));
            }
        }
        if is_fence_marker(line) {
            in_fence = !in_fence;
        }
        current.push_str(line);
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// A level-1 heading marker: `#` followed by whitespace. A lone `#` at
/// end of line counts (its newline is the whitespace).
fn is_slide_boundary(line: &str) -> bool {
    let mut bytes = line.bytes();
    if bytes.next() != Some(b'#') {
        return false;
    }
    match bytes.next() {
        Some(b) => b.is_ascii_whitespace(),
        None => true,
    }
}
