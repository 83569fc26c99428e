use super::{
    cursor::Cursor,
    kinds::{
        delimited::{Delim, try_delimited},
        note::try_note,
        tag::{TagToken, try_tag},
    },
    types::{Segment, SegmentKind},
};

/// Bytes that can start a markup construct. The fallback text run stops
/// at any of these; everything else is consumed in bulk.
const MARKUP_START: &[u8] = b"*~`{(";

/// Tokenizes one line of inline text into an ordered [`Segment`] list.
///
/// Constructs are tried in priority order at each position: tag (and the
/// zero-width `{}` marker), note, code, bold, italic, strikethrough. When
/// nothing matches, the longest run of plain characters is consumed; if
/// the current character itself is a markup-start byte that matched no
/// construct, exactly one character is consumed as literal text. That
/// single-character degradation guarantees termination on malformed or
/// unterminated markup.
///
/// Concatenating the returned payloads in order reproduces the input with
/// only the markup delimiters removed.
pub fn parse_inline(s: &str) -> Vec<Segment> {
    let mut cur = Cursor::new(s);
    let mut out: Vec<Segment> = vec![];

    while !cur.eof() {
        if let Some(token) = try_tag(&mut cur) {
            match token {
                TagToken::ZeroWidth => {}
                TagToken::Styled { name, inner } => out.push(Segment::tag(name, inner)),
            }
            continue;
        }
        if let Some(inner) = try_note(&mut cur) {
            out.push(Segment::new(SegmentKind::Note, inner));
            continue;
        }
        if let Some(inner) = try_delimited(&mut cur, Delim::CODE) {
            out.push(Segment::new(SegmentKind::Code, inner));
            continue;
        }
        if let Some(inner) = try_delimited(&mut cur, Delim::BOLD) {
            out.push(Segment::new(SegmentKind::Bold, inner));
            continue;
        }
        if let Some(inner) = try_delimited(&mut cur, Delim::ITALIC) {
            out.push(Segment::new(SegmentKind::Italic, inner));
            continue;
        }
        if let Some(inner) = try_delimited(&mut cur, Delim::STRIKE) {
            out.push(Segment::new(SegmentKind::Strikethrough, inner));
            continue;
        }

        let run = cur.take_until_any(MARKUP_START);
        if run.is_empty() {
            // A markup-start byte that opened nothing: literal text.
            if let Some(c) = cur.bump_char() {
                push_text(&mut out, c.encode_utf8(&mut [0u8; 4]));
            }
        } else {
            push_text(&mut out, run);
        }
    }

    out
}

/// Appends literal text, merging into a trailing `Text` segment so the
/// single-character fallback doesn't fragment the output.
fn push_text(out: &mut Vec<Segment>, text: &str) {
    if let Some(last) = out.last_mut()
        && last.kind == SegmentKind::Text
    {
        last.text.push_str(text);
        return;
    }
    out.push(Segment::text(text));
}
