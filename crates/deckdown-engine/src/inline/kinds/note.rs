use super::super::cursor::Cursor;

pub const OPEN: &str = "((";
pub const CLOSE: &str = "))";

/// Attempts a speaker-note annotation `((text))` at the current position.
///
/// Returns `None` without moving the cursor if not at `((` or unclosed.
pub fn try_note<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.starts_with(OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(OPEN.len());
    match cur.find(CLOSE) {
        Some(n) => {
            let inner = cur.take(n);
            cur.bump_n(CLOSE.len());
            Some(inner)
        }
        None => {
            *cur = saved;
            None
        }
    }
}
