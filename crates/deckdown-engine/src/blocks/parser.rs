use std::collections::BTreeMap;

use crate::models::Slide;

use super::{
    patterns,
    types::{AlignDirection, Block, ListItem},
};

/// Spaces per nesting level for unordered list indentation.
const BULLET_INDENT: usize = 2;
/// Spaces per nesting level for ordered list indentation.
const ORDERED_INDENT: usize = 3;

/// Parses one slide chunk into its ordered block sequence.
///
/// Every line is eventually classified — Paragraph is the universal
/// fallback — so parsing is total over arbitrary input and never errors.
pub fn parse_slide(chunk: &str) -> Slide {
    let mut lines: Vec<&str> = chunk.split('\n').collect();
    // split() leaves a phantom empty line after a trailing newline
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut parser = SlideParser { lines, pos: 0 };
    let mut blocks = vec![];
    while parser.pos < parser.lines.len() {
        if parser.skip_comment() {
            continue;
        }
        blocks.push(parser.scan_block());
    }
    Slide::new(blocks)
}

/// Single-pass scanner over a slide's lines. Each handler consumes the
/// run of lines it recognizes and leaves `pos` at the first line it
/// rejected; there is no backtracking past `pos` other than the bounded
/// look-ahead used for definition terms and attribute lines.
struct SlideParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl SlideParser<'_> {
    fn scan_block(&mut self) -> Block {
        let line = self.lines[self.pos];

        if line.trim().is_empty() {
            self.pos += 1;
            return Block::Blank;
        }
        if let Some(block) = self.scan_align(line) {
            return block;
        }
        if let Some(block) = self.scan_image(line) {
            return block;
        }
        if let Some(block) = self.scan_fenced_code() {
            return block;
        }
        if let Some(block) = self.scan_indented_code() {
            return block;
        }
        if let Some(block) = self.scan_heading(line) {
            return block;
        }
        if let Some(block) = self.scan_blockquote() {
            return block;
        }
        if let Some(block) = self.scan_table() {
            return block;
        }
        if let Some(block) = self.scan_unordered_list() {
            return block;
        }
        if let Some(block) = self.scan_ordered_list() {
            return block;
        }
        if let Some(block) = self.scan_definition() {
            return block;
        }

        self.pos += 1;
        Block::Paragraph {
            text: line.trim().to_string(),
        }
    }

    /// Skips a `{::comment}` region, including its close marker. An
    /// unclosed region discards everything to the end of the slide.
    fn skip_comment(&mut self) -> bool {
        if !patterns::COMMENT_OPEN.is_match(self.lines[self.pos]) {
            return false;
        }
        self.pos += 1;
        while self.pos < self.lines.len() {
            let closed = patterns::COMMENT_CLOSE.is_match(self.lines[self.pos]);
            self.pos += 1;
            if closed {
                break;
            }
        }
        true
    }

    fn scan_align(&mut self, line: &str) -> Option<Block> {
        let caps = patterns::ALIGN.captures(line)?;
        let direction = match &caps[1] {
            "center" => AlignDirection::Center,
            _ => AlignDirection::Right,
        };
        self.pos += 1;
        Some(Block::Align { direction })
    }

    fn scan_image(&mut self, line: &str) -> Option<Block> {
        let caps = patterns::IMAGE.captures(line)?;
        let path = caps[2].to_string();
        self.pos += 1;
        let attributes = self.take_attr_line().unwrap_or_default();
        Some(Block::Image { path, attributes })
    }

    fn scan_fenced_code(&mut self) -> Option<Block> {
        let mut language = patterns::fence_open(self.lines[self.pos])?;
        self.pos += 1;

        let mut content = vec![];
        let mut closed = false;
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            self.pos += 1;
            if patterns::is_fence_marker(line) {
                closed = true;
                break;
            }
            content.push(line);
        }

        if closed && let Some(attrs) = self.take_attr_line() {
            if let Some(lang) = attrs.get("lang") {
                language = Some(lang.clone());
            }
        }

        Some(Block::CodeBlock {
            content: content.join("\n"),
            language,
        })
    }

    fn scan_indented_code(&mut self) -> Option<Block> {
        patterns::INDENT4.captures(self.lines[self.pos])?;

        let mut content = vec![];
        while self.pos < self.lines.len() {
            match patterns::INDENT4.captures(self.lines[self.pos]) {
                Some(caps) => {
                    content.push(caps.get(1).map_or("", |m| m.as_str()).to_string());
                    self.pos += 1;
                }
                None => break,
            }
        }

        let mut language = None;
        if let Some(attrs) = self.take_attr_line()
            && let Some(lang) = attrs.get("lang")
        {
            language = Some(lang.clone());
        }

        Some(Block::CodeBlock {
            content: content.join("\n"),
            language,
        })
    }

    fn scan_heading(&mut self, line: &str) -> Option<Block> {
        let caps = patterns::HEADING.captures(line)?;
        self.pos += 1;
        Some(Block::Heading {
            level: caps[1].len() as u8,
            text: caps[2].trim().to_string(),
        })
    }

    fn scan_blockquote(&mut self) -> Option<Block> {
        if !self.lines[self.pos].starts_with('>') {
            return None;
        }
        let mut quoted = vec![];
        while self.pos < self.lines.len() {
            let Some(rest) = self.lines[self.pos].strip_prefix('>') else {
                break;
            };
            quoted.push(rest.strip_prefix(' ').unwrap_or(rest));
            self.pos += 1;
        }
        Some(Block::Blockquote {
            content: quoted.join("\n"),
        })
    }

    fn scan_table(&mut self) -> Option<Block> {
        if !self.lines[self.pos].trim_start().starts_with('|') {
            return None;
        }
        let mut rows: Vec<Vec<String>> = vec![];
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if !line.trim_start().starts_with('|') {
                break;
            }
            self.pos += 1;
            if patterns::TABLE_SEPARATOR.is_match(line) {
                continue;
            }
            rows.push(split_cells(line));
        }
        let mut rows = rows.into_iter();
        // Zero retained rows degrades to an empty (zero-height) table.
        let header = rows.next().unwrap_or_default();
        Some(Block::Table {
            header,
            rows: rows.collect(),
        })
    }

    /// A bullet line is always a new item, at any indentation; only
    /// indented non-bullet lines continue the previous item's text.
    fn scan_unordered_list(&mut self) -> Option<Block> {
        patterns::BULLET.captures(self.lines[self.pos])?;

        let mut items: Vec<ListItem> = vec![];
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if let Some(caps) = patterns::BULLET.captures(line) {
                let depth = caps[1].len() / BULLET_INDENT;
                items.push(ListItem::new(caps[3].trim_end(), depth));
                self.pos += 1;
                continue;
            }
            if let Some(caps) = patterns::LIST_CONTINUATION.captures(line)
                && let Some(last) = items.last_mut()
            {
                last.text.push(' ');
                last.text.push_str(caps[1].trim_end());
                self.pos += 1;
                continue;
            }
            break;
        }
        Some(Block::UnorderedList { items })
    }

    fn scan_ordered_list(&mut self) -> Option<Block> {
        patterns::ORDERED.captures(self.lines[self.pos])?;

        let mut items: Vec<ListItem> = vec![];
        while self.pos < self.lines.len() {
            let Some(caps) = patterns::ORDERED.captures(self.lines[self.pos]) else {
                break;
            };
            let depth = caps[1].len() / ORDERED_INDENT;
            items.push(ListItem::new(caps[2].trim_end(), depth));
            self.pos += 1;
        }
        Some(Block::OrderedList { items })
    }

    /// A non-blank line is a term only when the immediately following
    /// line carries the definition marker; otherwise the caller falls
    /// through to Paragraph.
    fn scan_definition(&mut self) -> Option<Block> {
        let next = self.lines.get(self.pos + 1)?;
        patterns::DEF_MARKER.captures(next)?;

        let term = self.lines[self.pos].trim().to_string();
        self.pos += 1;

        let mut definition = vec![];
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            if let Some(caps) = patterns::DEF_MARKER.captures(line) {
                definition.push(caps[1].to_string());
            } else if let Some(caps) = patterns::INDENT4.captures(line) {
                definition.push(caps.get(1).map_or("", |m| m.as_str()).to_string());
            } else {
                break;
            }
            self.pos += 1;
        }

        Some(Block::DefinitionList {
            term,
            definition: definition.join("\n"),
        })
    }

    /// Consumes the current line as an attribute map if it matches the
    /// attribute-line pattern.
    fn take_attr_line(&mut self) -> Option<BTreeMap<String, String>> {
        let attrs = patterns::attr_line(self.lines.get(self.pos)?)?;
        self.pos += 1;
        Some(attrs)
    }
}

/// Splits a table row on `|`, trimming cells and discarding the empty
/// leading/trailing cells produced by the outer pipe delimiters.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.trim().split('|').map(str::trim).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(chunk: &str) -> Vec<Block> {
        parse_slide(chunk).blocks
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            blocks("# One\n### Three\n"),
            vec![
                Block::Heading {
                    level: 1,
                    text: "One".to_string()
                },
                Block::Heading {
                    level: 3,
                    text: "Three".to_string()
                },
            ]
        );
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        assert_eq!(
            blocks("####### nope\n"),
            vec![Block::Paragraph {
                text: "####### nope".to_string()
            }]
        );
    }

    #[test]
    fn nested_unordered_list_depths() {
        let parsed = blocks("* top\n  * nested\n    * deep\n");
        assert_eq!(
            parsed,
            vec![Block::UnorderedList {
                items: vec![
                    ListItem::new("top", 0),
                    ListItem::new("nested", 1),
                    ListItem::new("deep", 2),
                ]
            }]
        );
    }

    #[test]
    fn list_continuation_joins_with_space() {
        assert_eq!(
            blocks("* first line\n  continued here\n* second\n"),
            vec![Block::UnorderedList {
                items: vec![
                    ListItem::new("first line continued here", 0),
                    ListItem::new("second", 0),
                ]
            }]
        );
    }

    #[test]
    fn dash_bullets_work() {
        assert_eq!(
            blocks("- a\n- b\n"),
            vec![Block::UnorderedList {
                items: vec![ListItem::new("a", 0), ListItem::new("b", 0)]
            }]
        );
    }

    #[test]
    fn ordered_list_depths_use_three_space_unit() {
        assert_eq!(
            blocks("1. one\n2. two\n   3. sub\n"),
            vec![Block::OrderedList {
                items: vec![
                    ListItem::new("one", 0),
                    ListItem::new("two", 0),
                    ListItem::new("sub", 1),
                ]
            }]
        );
    }

    #[test]
    fn source_numbering_is_not_kept() {
        assert_eq!(
            blocks("7. seven\n9. nine\n"),
            vec![Block::OrderedList {
                items: vec![ListItem::new("seven", 0), ListItem::new("nine", 0)]
            }]
        );
    }

    #[test]
    fn fenced_code_with_language() {
        assert_eq!(
            blocks("```ruby\nputs 1\n```\n"),
            vec![Block::CodeBlock {
                content: "puts 1".to_string(),
                language: Some("ruby".to_string()),
            }]
        );
    }

    #[test]
    fn fenced_code_attribute_line_overrides_language() {
        assert_eq!(
            blocks("```\nx = 1\n```\n{: lang=\"python\"}\n"),
            vec![Block::CodeBlock {
                content: "x = 1".to_string(),
                language: Some("python".to_string()),
            }]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(
            blocks("```\nstill code\n"),
            vec![Block::CodeBlock {
                content: "still code".to_string(),
                language: None,
            }]
        );
    }

    #[test]
    fn fence_content_is_not_parsed_as_blocks() {
        assert_eq!(
            blocks("```\n# not a heading\n* not a list\n```\n"),
            vec![Block::CodeBlock {
                content: "# not a heading\n* not a list".to_string(),
                language: None,
            }]
        );
    }

    #[test]
    fn indented_code_deindents_one_unit() {
        assert_eq!(
            blocks("    x = 1\n        indented_more\n"),
            vec![Block::CodeBlock {
                content: "x = 1\n    indented_more".to_string(),
                language: None,
            }]
        );
    }

    #[test]
    fn blockquote_merges_lines() {
        assert_eq!(
            blocks("> first\n> second\nafter\n"),
            vec![
                Block::Blockquote {
                    content: "first\nsecond".to_string()
                },
                Block::Paragraph {
                    text: "after".to_string()
                },
            ]
        );
    }

    #[test]
    fn table_drops_separator_and_splits_cells() {
        assert_eq!(
            blocks("| a | b |\n|---|---|\n| 1 | 2 |\n"),
            vec![Block::Table {
                header: vec!["a".to_string(), "b".to_string()],
                rows: vec![vec!["1".to_string(), "2".to_string()]],
            }]
        );
    }

    #[test]
    fn table_with_only_separators_is_empty() {
        assert_eq!(
            blocks("|---|\n"),
            vec![Block::Table {
                header: vec![],
                rows: vec![],
            }]
        );
    }

    #[test]
    fn definition_list_requires_marker_lookahead() {
        assert_eq!(
            blocks("term\n:   the definition\n:   more\n"),
            vec![Block::DefinitionList {
                term: "term".to_string(),
                definition: "the definition\nmore".to_string(),
            }]
        );
    }

    #[test]
    fn definition_continuation_by_indent() {
        assert_eq!(
            blocks("term\n:   first\n    second\n"),
            vec![Block::DefinitionList {
                term: "term".to_string(),
                definition: "first\nsecond".to_string(),
            }]
        );
    }

    #[test]
    fn failed_definition_lookahead_downgrades_to_paragraph() {
        assert_eq!(
            blocks("would-be term\nnot a marker\n"),
            vec![
                Block::Paragraph {
                    text: "would-be term".to_string()
                },
                Block::Paragraph {
                    text: "not a marker".to_string()
                },
            ]
        );
    }

    #[test]
    fn alignment_directives() {
        assert_eq!(
            blocks("{:.center}\nmiddle\n{:.right}\nedge\n"),
            vec![
                Block::Align {
                    direction: AlignDirection::Center
                },
                Block::Paragraph {
                    text: "middle".to_string()
                },
                Block::Align {
                    direction: AlignDirection::Right
                },
                Block::Paragraph {
                    text: "edge".to_string()
                },
            ]
        );
    }

    #[test]
    fn comment_region_emits_nothing() {
        assert_eq!(
            blocks("before\n{::comment}\nhidden\n# also hidden\n{:/comment}\nafter\n"),
            vec![
                Block::Paragraph {
                    text: "before".to_string()
                },
                Block::Paragraph {
                    text: "after".to_string()
                },
            ]
        );
    }

    #[test]
    fn short_comment_close_works() {
        assert_eq!(
            blocks("{::comment}\nhidden\n{:/}\nvisible\n"),
            vec![Block::Paragraph {
                text: "visible".to_string()
            }]
        );
    }

    #[test]
    fn unclosed_comment_discards_rest_of_slide() {
        assert_eq!(blocks("{::comment}\nhidden\nstill hidden\n"), vec![]);
    }

    #[test]
    fn image_with_attribute_map() {
        let parsed = blocks("![logo](img/logo.png)\n{: width=\"50%\" height=\"10\"}\n");
        let Block::Image { path, attributes } = &parsed[0] else {
            panic!("expected image block, got {parsed:?}");
        };
        assert_eq!(path, "img/logo.png");
        assert_eq!(attributes.get("width").map(String::as_str), Some("50%"));
        assert_eq!(attributes.get("height").map(String::as_str), Some("10"));
    }

    #[test]
    fn blank_lines_become_blank_blocks() {
        assert_eq!(
            blocks("a\n\nb\n"),
            vec![
                Block::Paragraph {
                    text: "a".to_string()
                },
                Block::Blank,
                Block::Paragraph {
                    text: "b".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_chunk_yields_no_blocks() {
        assert_eq!(blocks(""), vec![]);
    }

    #[test]
    fn block_order_matches_source_order() {
        let parsed = blocks("# Title\n\ntext\n\n* item\n");
        assert_eq!(
            parsed,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Title".to_string()
                },
                Block::Blank,
                Block::Paragraph {
                    text: "text".to_string()
                },
                Block::Blank,
                Block::UnorderedList {
                    items: vec![ListItem::new("item", 0)]
                },
            ]
        );
    }
}
