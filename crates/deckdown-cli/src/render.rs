//! Maps parsed blocks onto styled ratatui lines.
//!
//! This is the consumer side of the engine: it owns the color theme, the
//! pending-alignment slot, and the decision to show or hide speaker
//! notes.

use deckdown_engine::{
    AlignDirection, Block, ListItem, Segment, SegmentKind, Slide, TagStyle, layout, parse_inline,
    resolve_tag, str_width, style as engine_style,
};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Renders one slide into terminal lines at the given content width.
pub fn slide_lines(slide: &Slide, width: u16, show_notes: bool) -> Vec<Line<'static>> {
    let mut out: Vec<Line<'static>> = vec![];
    // One-slot state: an Align block applies to the next block only.
    let mut pending_align: Option<Alignment> = None;

    for block in &slide.blocks {
        if let Block::Align { direction } = block {
            pending_align = Some(match direction {
                AlignDirection::Center => Alignment::Center,
                AlignDirection::Right => Alignment::Right,
            });
            continue;
        }

        let mut lines = block_lines(block, width, show_notes);
        if let Some(alignment) = pending_align.take() {
            lines = lines
                .into_iter()
                .map(|line| line.alignment(alignment))
                .collect();
        }
        out.extend(lines);
    }
    out
}

fn block_lines(block: &Block, width: u16, show_notes: bool) -> Vec<Line<'static>> {
    match block {
        Block::Heading { level, text } => heading_lines(*level, text, width, show_notes),
        Block::Paragraph { text } => wrapped_lines(text, width, 0, show_notes),
        Block::CodeBlock { content, language } => code_lines(content, language.as_deref()),
        Block::UnorderedList { items } => bullet_lines(items, width, show_notes),
        Block::OrderedList { items } => ordered_lines(items, width, show_notes),
        Block::DefinitionList { term, definition } => definition_lines(term, definition, show_notes),
        Block::Blockquote { content } => content
            .lines()
            .map(|l| {
                Line::from(vec![
                    Span::styled("│ ".to_string(), Style::default().fg(Color::Green)),
                    Span::styled(l.to_string(), Style::default().fg(Color::Green)),
                ])
            })
            .collect(),
        Block::Table { header, rows } => table_lines(header, rows),
        Block::Image { path, attributes } => {
            let mut label = format!("[image: {path}");
            for (key, value) in attributes {
                label.push_str(&format!(" {key}={value}"));
            }
            label.push(']');
            vec![Line::from(Span::styled(
                label,
                Style::default().fg(Color::DarkGray),
            ))]
        }
        Block::Blank => vec![Line::default()],
        Block::Align { .. } => vec![], // consumed by the caller
    }
}

fn heading_lines(level: u8, text: &str, width: u16, show_notes: bool) -> Vec<Line<'static>> {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Blue,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = layout::wrap(&parse_inline(text), width as i32, 1)
        .iter()
        .map(|segs| styled_line(segs, show_notes, Some(style)))
        .collect();
    // Cell grids can't scale glyphs; large headings get breathing room
    // instead.
    let scale = engine_style::heading_scale(level).max(deckdown_engine::blocks::size_scan(text));
    if scale >= 2 {
        lines.push(Line::default());
    }
    lines
}

fn wrapped_lines(text: &str, width: u16, indent: usize, show_notes: bool) -> Vec<Line<'static>> {
    let segments = parse_inline(text);
    let inner = width as i32 - indent as i32;
    layout::wrap(&segments, inner, 1)
        .iter()
        .map(|segs| {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            spans.extend(line_spans(segs, show_notes, None));
            Line::from(spans)
        })
        .collect()
}

fn code_lines(content: &str, language: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![];
    if let Some(lang) = language {
        lines.push(Line::from(Span::styled(
            format!("── {lang} ──"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    for l in content.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {l}"),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines
}

fn bullet_lines(items: &[ListItem], width: u16, show_notes: bool) -> Vec<Line<'static>> {
    items
        .iter()
        .flat_map(|item| {
            let prefix = format!("{}• ", "  ".repeat(item.depth));
            item_lines(&prefix, &item.text, width, show_notes)
        })
        .collect()
}

fn ordered_lines(items: &[ListItem], width: u16, show_notes: bool) -> Vec<Line<'static>> {
    renumber(items)
        .into_iter()
        .flat_map(|(label, item)| {
            let prefix = format!("{}{label} ", "  ".repeat(item.depth));
            item_lines(&prefix, &item.text, width, show_notes)
        })
        .collect()
}

/// Sequential labels starting at 1, with a separate counter per depth.
/// Returning to a shallower depth resets the deeper counters.
fn renumber(items: &[ListItem]) -> Vec<(String, &ListItem)> {
    let mut counters: Vec<usize> = vec![];
    items
        .iter()
        .map(|item| {
            counters.truncate(item.depth + 1);
            if counters.len() <= item.depth {
                counters.resize(item.depth + 1, 0);
            }
            counters[item.depth] += 1;
            (format!("{}.", counters[item.depth]), item)
        })
        .collect()
}

fn item_lines(prefix: &str, text: &str, width: u16, show_notes: bool) -> Vec<Line<'static>> {
    let indent = str_width(prefix);
    let segments = parse_inline(text);
    let inner = width as i32 - indent as i32;
    layout::wrap(&segments, inner, 1)
        .iter()
        .enumerate()
        .map(|(i, segs)| {
            let lead = if i == 0 {
                prefix.to_string()
            } else {
                " ".repeat(indent)
            };
            let mut spans = vec![Span::raw(lead)];
            spans.extend(line_spans(segs, show_notes, None));
            Line::from(spans)
        })
        .collect()
}

fn definition_lines(term: &str, definition: &str, show_notes: bool) -> Vec<Line<'static>> {
    let mut lines = vec![styled_line(
        &parse_inline(term),
        show_notes,
        Some(Style::default().add_modifier(Modifier::BOLD)),
    )];
    for l in definition.lines() {
        let mut spans = vec![Span::raw("    ")];
        spans.extend(line_spans(&parse_inline(l), show_notes, None));
        lines.push(Line::from(spans));
    }
    lines
}

fn table_lines(header: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    if header.is_empty() && rows.is_empty() {
        return vec![];
    }
    let columns = header
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(str_width(cell));
        }
    }

    let mut lines = vec![Line::from(Span::styled(
        format_row(header, &widths),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for row in rows {
        lines.push(Line::from(Span::raw(format_row(row, &widths))));
    }
    lines
}

/// Pads each cell to its column width, display-width aware so wide
/// characters keep columns aligned.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", String::as_str);
        let pad = width.saturating_sub(str_width(cell));
        out.push_str(&format!(" {cell}{} |", " ".repeat(pad)));
    }
    out
}

fn styled_line(segments: &[Segment], show_notes: bool, base: Option<Style>) -> Line<'static> {
    Line::from(line_spans(segments, show_notes, base))
}

fn line_spans(segments: &[Segment], show_notes: bool, base: Option<Style>) -> Vec<Span<'static>> {
    segments
        .iter()
        .filter_map(|seg| segment_span(seg, show_notes, base))
        .collect()
}

fn segment_span(
    segment: &Segment,
    show_notes: bool,
    base: Option<Style>,
) -> Option<Span<'static>> {
    let base = base.unwrap_or_default();
    let style = match &segment.kind {
        SegmentKind::Text => base,
        SegmentKind::Bold => base.add_modifier(Modifier::BOLD),
        SegmentKind::Italic => base.add_modifier(Modifier::ITALIC),
        SegmentKind::Strikethrough => base.add_modifier(Modifier::CROSSED_OUT),
        SegmentKind::Code => base.fg(Color::Yellow),
        SegmentKind::Tag { name } => match resolve_tag(name) {
            Some(TagStyle::Color(color)) => base.fg(theme_color(color)),
            // Glyphs can't grow in a cell grid; scaled text reads as
            // emphasis instead.
            Some(TagStyle::Scale(scale)) if scale >= 2 => base.add_modifier(Modifier::BOLD),
            _ => base,
        },
        SegmentKind::Note => {
            if !show_notes {
                return None;
            }
            base.fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
        }
    };
    Some(Span::styled(segment.text.clone(), style))
}

fn theme_color(color: engine_style::Color) -> Color {
    use engine_style::Color as C;
    match color {
        C::Black => Color::Black,
        C::Red => Color::Red,
        C::Green => Color::Green,
        C::Yellow => Color::Yellow,
        C::Blue => Color::Blue,
        C::Magenta => Color::Magenta,
        C::Cyan => Color::Cyan,
        C::White => Color::Gray,
        C::BrightBlack => Color::DarkGray,
        C::BrightRed => Color::LightRed,
        C::BrightGreen => Color::LightGreen,
        C::BrightYellow => Color::LightYellow,
        C::BrightBlue => Color::LightBlue,
        C::BrightMagenta => Color::LightMagenta,
        C::BrightCyan => Color::LightCyan,
        C::BrightWhite => Color::White,
        C::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}
