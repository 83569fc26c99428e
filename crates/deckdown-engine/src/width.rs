//! Display-width classification for fixed-grid rendering.
//!
//! A character occupies either one or two terminal columns. Double-width
//! characters are those in the East Asian Wide and Fullwidth blocks (plus
//! the common wide emoji planes); everything else counts as one column.

/// Inclusive codepoint ranges that render as two columns.
///
/// Derived from the East Asian Width property (`W` and `F` classes).
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo (initial consonants)
    (0x2329, 0x232A),   // angle brackets
    (0x2E80, 0x303E),   // CJK radicals, Kangxi, CJK symbols and punctuation
    (0x3041, 0x33FF),   // Hiragana, Katakana, CJK compatibility
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA000, 0xA4CF),   // Yi syllables and radicals
    (0xA960, 0xA97F),   // Hangul Jamo extended-A
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE10, 0xFE19),   // vertical forms
    (0xFE30, 0xFE6F),   // CJK compatibility forms, small form variants
    (0xFF00, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
    (0x1B000, 0x1B001), // Kana supplement
    (0x1F300, 0x1F64F), // pictographs, emoticons
    (0x1F680, 0x1F6FF), // transport symbols
    (0x1F900, 0x1F9FF), // supplemental pictographs
    (0x20000, 0x2FFFD), // CJK extensions B and beyond
    (0x30000, 0x3FFFD), // CJK extension G
];

/// Returns the number of display columns `c` occupies: 1 or 2.
pub fn display_width(c: char) -> usize {
    let cp = c as u32;
    let wide = WIDE_RANGES
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end);
    if wide { 2 } else { 1 }
}

/// Sum of [`display_width`] over all characters in `s`.
pub fn str_width(s: &str) -> usize {
    s.chars().map(display_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('a', 1)]
    #[case('Z', 1)]
    #[case(' ', 1)]
    #[case('é', 1)]
    #[case('日', 2)]
    #[case('本', 2)]
    #[case('ん', 2)]
    #[case('カ', 2)]
    #[case('한', 2)]
    #[case('ｱ', 1)] // halfwidth katakana sits past U+FF60
    #[case('Ａ', 2)] // fullwidth latin
    #[case('🚀', 2)]
    #[case('😀', 2)]
    fn classifies_characters(#[case] c: char, #[case] expected: usize) {
        assert_eq!(display_width(c), expected);
    }

    #[test]
    fn string_width_mixes_narrow_and_wide() {
        assert_eq!(str_width("abc"), 3);
        assert_eq!(str_width("日本語"), 6);
        assert_eq!(str_width("ab日c"), 5);
        assert_eq!(str_width(""), 0);
    }
}
