use super::super::cursor::Cursor;

/// Delimiters for the symmetric inline constructs.
pub struct Delim;

impl Delim {
    pub const CODE: &'static str = "`";
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const STRIKE: &'static str = "~~";
}

/// Attempts `<delim>inner<delim>` at the current position, requiring a
/// non-empty inner so that an immediately repeated delimiter (e.g. the
/// `**` left by an unclosed bold) falls through to literal text.
///
/// Returns `None` without moving the cursor if the construct doesn't
/// match or isn't closed.
pub fn try_delimited<'a>(cur: &mut Cursor<'a>, delim: &str) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(delim.len());
    match cur.find(delim) {
        Some(0) | None => {
            *cur = saved;
            None
        }
        Some(n) => {
            let inner = cur.take(n);
            cur.bump_n(delim.len());
            Some(inner)
        }
    }
}
