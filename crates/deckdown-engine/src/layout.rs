//! Line wrapping over styled segments in a fixed-width display grid.
//!
//! Widths are measured in display columns (see [`crate::width`]) and
//! multiplied by each segment's effective scale, so size-tagged text
//! consumes proportionally more of the line.

use crate::inline::{Segment, SegmentKind};
use crate::style::{self, Scale, TagStyle};
use crate::width::display_width;

/// Scale a segment renders at: its tag-resolved size if it has one, else
/// the caller-supplied default.
pub fn effective_scale(segment: &Segment, default_scale: Scale) -> Scale {
    if let SegmentKind::Tag { name } = &segment.kind
        && let Some(TagStyle::Scale(scale)) = style::resolve_tag(name)
    {
        return scale;
    }
    default_scale
}

/// Largest effective scale across `segments`; what a line of them costs
/// in rows.
pub fn max_scale(segments: &[Segment], default_scale: Scale) -> Scale {
    segments
        .iter()
        .map(|seg| effective_scale(seg, default_scale))
        .max()
        .unwrap_or(default_scale)
}

/// Wraps `segments` into lines no wider than `max_width` display
/// columns.
///
/// Segments are split at character boundaries when they overflow; every
/// split part keeps the original segment's kind and tag, so styling is
/// continuous across wrap points. A single character whose scaled width
/// already exceeds the limit is placed alone rather than dropped. A zero
/// or negative `max_width` short-circuits to one unwrapped line. Content
/// is never dropped and never reordered.
pub fn wrap(segments: &[Segment], max_width: i32, default_scale: Scale) -> Vec<Vec<Segment>> {
    if max_width <= 0 {
        return vec![segments.to_vec()];
    }
    let max_width = max_width as usize;

    let mut lines: Vec<Vec<Segment>> = vec![];
    let mut line: Vec<Segment> = vec![];
    let mut used = 0usize;

    for segment in segments {
        let scale = effective_scale(segment, default_scale) as usize;

        if segment.text.is_empty() {
            line.push(segment.clone());
            continue;
        }

        let mut piece = String::new();
        for c in segment.text.chars() {
            let cost = display_width(c) * scale;
            if used + cost > max_width && used > 0 {
                if !piece.is_empty() {
                    line.push(Segment::new(segment.kind.clone(), std::mem::take(&mut piece)));
                }
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            piece.push(c);
            used += cost;
        }
        if !piece.is_empty() {
            line.push(Segment::new(segment.kind.clone(), piece));
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
