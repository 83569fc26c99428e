use super::super::cursor::Cursor;

pub const OPEN: u8 = b'{';
pub const CLOSE: u8 = b'}';

/// Result of matching a brace construct at the current position.
#[derive(Debug, PartialEq, Eq)]
pub enum TagToken<'a> {
    /// The empty tag `{}`: a zero-width marker, consumed and dropped.
    /// Its one job is breaking up runs that would otherwise parse as
    /// markup.
    ZeroWidth,
    /// `{name}inner{/name}` with a size/color attribute name.
    Styled { name: &'a str, inner: &'a str },
}

/// Attempts a tag at the current position.
///
/// The name is a run of ASCII alphanumerics and hyphens, so block-level
/// directives like `{:.center}` never match here. Returns `None` without
/// moving the cursor when the open or the matching `{/name}` is missing.
pub fn try_tag<'a>(cur: &mut Cursor<'a>) -> Option<TagToken<'a>> {
    if cur.peek() != Some(OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(1);

    let name_len = cur
        .rest()
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
        .count();
    let name = cur.take(name_len);

    if cur.peek() != Some(CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump_n(1);

    if name.is_empty() {
        return Some(TagToken::ZeroWidth);
    }

    let close = format!("{{/{name}}}");
    match cur.find(&close) {
        Some(n) => {
            let inner = cur.take(n);
            cur.bump_n(close.len());
            Some(TagToken::Styled { name, inner })
        }
        None => {
            *cur = saved;
            None
        }
    }
}
