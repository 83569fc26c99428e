//! Line patterns shared by the block parser and the slide splitter.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern compiles"));

pub static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)([*-])\s+(.*)$").expect("bullet pattern compiles"));

pub static ORDERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)\d+\.\s+(.*)$").expect("ordered pattern compiles"));

/// Indented non-bullet line absorbed into the previous list item.
pub static LIST_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {2,}(\S.*)$").expect("continuation pattern compiles"));

/// Definition marker: a colon followed by exactly three spaces. A fourth
/// space belongs to the definition text.
pub static DEF_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^: {3}(.*)$").expect("definition pattern compiles"));

/// One four-space indent unit; opens indented code and continues a
/// definition.
pub static INDENT4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {4}(.*)$").expect("indent pattern compiles"));

/// Table header/body separator row: dashes, colons, pipes and whitespace
/// only.
pub static TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-:|\s]+$").expect("separator pattern compiles"));

pub static ALIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{:\.(center|right)\}\s*$").expect("align pattern compiles"));

pub static COMMENT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{::comment\}\s*$").expect("comment pattern compiles"));

/// Both the long close `{:/comment}` and the short close `{:/}` end a
/// comment region.
pub static COMMENT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\{:/(?:comment)?\}\s*$").expect("comment pattern compiles"));

pub static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*!\[([^\]]*)\]\(([^)]+)\)\s*$").expect("image pattern compiles"));

/// A trailing attribute line `{: key="value" ...}`. The whitespace after
/// the colon keeps this from matching the align/comment directive forms.
static ATTR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*\{:\s+(.*?)\s*\}\s*$"#).expect("attribute pattern compiles"));

static ATTR_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)="([^"]*)""#).expect("attribute pattern compiles")
});

const FENCE: &str = "```";

/// True when the line's trimmed form starts a (or closes an open) fence.
pub fn is_fence_marker(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// If the line opens a fence, returns its optional language token.
pub fn fence_open(line: &str) -> Option<Option<String>> {
    let rest = line.trim_start().strip_prefix(FENCE)?;
    Some(rest.split_whitespace().next().map(str::to_string))
}

/// Parses an attribute line into its key/value map, or `None` when the
/// line is not an attribute line (or carries no pairs).
pub fn attr_line(line: &str) -> Option<BTreeMap<String, String>> {
    let caps = ATTR_LINE.captures(line)?;
    let body = caps.get(1).map_or("", |m| m.as_str());
    let map: BTreeMap<String, String> = ATTR_PAIR
        .captures_iter(body)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect();
    if map.is_empty() { None } else { Some(map) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_pattern_limits_levels() {
        assert!(HEADING.is_match("# one"));
        assert!(HEADING.is_match("###### six"));
        assert!(!HEADING.is_match("####### seven"));
        assert!(!HEADING.is_match("#nospace"));
    }

    #[test]
    fn fence_open_extracts_language() {
        assert_eq!(fence_open("```ruby"), Some(Some("ruby".to_string())));
        assert_eq!(fence_open("``` ruby extra"), Some(Some("ruby".to_string())));
        assert_eq!(fence_open("```"), Some(None));
        assert_eq!(fence_open("code"), None);
    }

    #[test]
    fn attr_line_collects_pairs() {
        let map = attr_line(r#"{: lang="ruby" width="50%"}"#).unwrap();
        assert_eq!(map.get("lang").map(String::as_str), Some("ruby"));
        assert_eq!(map.get("width").map(String::as_str), Some("50%"));
    }

    #[test]
    fn attr_line_rejects_directive_forms() {
        assert_eq!(attr_line("{:.center}"), None);
        assert_eq!(attr_line("{::comment}"), None);
        assert_eq!(attr_line("{:/}"), None);
        assert_eq!(attr_line("plain text"), None);
    }

    #[test]
    fn definition_marker_is_exactly_three_spaces() {
        assert!(DEF_MARKER.is_match(":   text"));
        assert!(!DEF_MARKER.is_match(":  short"));
        let caps = DEF_MARKER.captures(":    four").unwrap();
        // The fourth space is content, not marker.
        assert_eq!(&caps[1], " four");
    }

    #[test]
    fn separator_rows() {
        assert!(TABLE_SEPARATOR.is_match("|---|:--:|"));
        assert!(TABLE_SEPARATOR.is_match("| --- | --- |"));
        assert!(!TABLE_SEPARATOR.is_match("| a | b |"));
    }
}
