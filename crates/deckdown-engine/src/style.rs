//! Resolution tables for inline tag attributes.
//!
//! A tag name resolves to either a size scale or a color, never both.
//! Size names are tried first, then named colors, then 6-hex-digit
//! literals. Unresolved names are the caller's problem (they render as
//! plain text).

use serde::Serialize;

/// Size multiplier applied to text, 1..=7.
pub type Scale = u8;

/// Scale applied to ordinary text when no tag overrides it.
pub const DEFAULT_SCALE: Scale = 1;

/// A resolved color, either one of the 16 terminal names or a literal RGB
/// value from a hex tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

/// What a tag attribute resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagStyle {
    Scale(Scale),
    Color(Color),
}

/// Resolves a raw tag attribute name. Size names win over color names;
/// `None` means the tag renders as plain text.
pub fn resolve_tag(name: &str) -> Option<TagStyle> {
    if let Some(scale) = size_scale(name) {
        return Some(TagStyle::Scale(scale));
    }
    if let Some(color) = named_color(name) {
        return Some(TagStyle::Color(color));
    }
    hex_color(name).map(TagStyle::Color)
}

/// Maps a size name (or the literals `"1"`..`"7"`) to a scale.
///
/// Names below `large` clamp to 1: text cannot drop below one cell.
pub fn size_scale(name: &str) -> Option<Scale> {
    let scale = match name {
        "xx-small" | "x-small" | "small" | "medium" => 1,
        "large" => 2,
        "x-large" => 3,
        "xx-large" => 4,
        "xxx-large" => 5,
        "xxxx-large" => 6,
        "1" => 1,
        "2" => 2,
        "3" => 3,
        "4" => 4,
        "5" => 5,
        "6" => 6,
        "7" => 7,
        _ => return None,
    };
    Some(scale)
}

/// Implicit scale for a heading level. Levels 1..=3 map to 4, 3, 2;
/// deeper headings render at body size.
pub fn heading_scale(level: u8) -> Scale {
    match level {
        1 => 4,
        2 => 3,
        3 => 2,
        _ => 1,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" | "bright-black" => Color::BrightBlack,
        "bright-red" => Color::BrightRed,
        "bright-green" => Color::BrightGreen,
        "bright-yellow" => Color::BrightYellow,
        "bright-blue" => Color::BrightBlue,
        "bright-magenta" => Color::BrightMagenta,
        "bright-cyan" => Color::BrightCyan,
        "bright-white" => Color::BrightWhite,
        _ => return None,
    };
    Some(color)
}

fn hex_color(name: &str) -> Option<Color> {
    if name.len() != 6 || !name.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&name[0..2], 16).ok()?;
    let g = u8::from_str_radix(&name[2..4], 16).ok()?;
    let b = u8::from_str_radix(&name[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("xx-small", 1)]
    #[case("small", 1)]
    #[case("medium", 1)]
    #[case("large", 2)]
    #[case("x-large", 3)]
    #[case("xx-large", 4)]
    #[case("xxx-large", 5)]
    #[case("xxxx-large", 6)]
    #[case("1", 1)]
    #[case("7", 7)]
    fn size_names_resolve(#[case] name: &str, #[case] expected: Scale) {
        assert_eq!(size_scale(name), Some(expected));
    }

    #[test]
    fn unknown_size_name() {
        assert_eq!(size_scale("huge"), None);
        assert_eq!(size_scale("0"), None);
        assert_eq!(size_scale("8"), None);
    }

    #[rstest]
    #[case("red", Color::Red)]
    #[case("bright-cyan", Color::BrightCyan)]
    #[case("gray", Color::BrightBlack)]
    #[case("grey", Color::BrightBlack)]
    fn color_names_resolve(#[case] name: &str, #[case] expected: Color) {
        assert_eq!(resolve_tag(name), Some(TagStyle::Color(expected)));
    }

    #[test]
    fn hex_literals_resolve() {
        assert_eq!(
            resolve_tag("ff8000"),
            Some(TagStyle::Color(Color::Rgb(0xff, 0x80, 0x00)))
        );
        assert_eq!(resolve_tag("FF8000"), Some(TagStyle::Color(Color::Rgb(0xff, 0x80, 0x00))));
    }

    #[test]
    fn malformed_hex_is_unresolved() {
        assert_eq!(resolve_tag("ff800"), None); // 5 digits
        assert_eq!(resolve_tag("ff80000"), None); // 7 digits
        assert_eq!(resolve_tag("ff80zz"), None);
    }

    #[test]
    fn sizes_win_over_colors() {
        // "3" is a scale literal, never a palette index.
        assert_eq!(resolve_tag("3"), Some(TagStyle::Scale(3)));
    }

    #[test]
    fn unresolved_name_is_none() {
        assert_eq!(resolve_tag("sparkly"), None);
    }

    #[rstest]
    #[case(1, 4)]
    #[case(2, 3)]
    #[case(3, 2)]
    #[case(4, 1)]
    #[case(6, 1)]
    fn heading_scales(#[case] level: u8, #[case] expected: Scale) {
        assert_eq!(heading_scale(level), expected);
    }
}
