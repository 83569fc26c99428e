//! Block recognition: one slide chunk in, an ordered [`Block`] sequence
//! out.

pub mod parser;
pub mod patterns;
pub mod types;

pub use parser::parse_slide;
pub use types::{AlignDirection, Block, ListItem};

use crate::inline::{SegmentKind, parse_inline};
use crate::style::{self, DEFAULT_SCALE, Scale, TagStyle};

/// Largest scale any inline run of `text` resolves to. This is the only
/// place block handling touches the inline tokenizer: a pre-scan so
/// height estimation can happen before layout.
pub fn size_scan(text: &str) -> Scale {
    parse_inline(text)
        .iter()
        .filter_map(|seg| match &seg.kind {
            SegmentKind::Tag { name } => match style::resolve_tag(name) {
                Some(TagStyle::Scale(scale)) => Some(scale),
                _ => None,
            },
            _ => None,
        })
        .max()
        .unwrap_or(DEFAULT_SCALE)
}

impl Block {
    /// Largest scale this block renders at, combining implicit heading
    /// scales with explicit size tags.
    pub fn max_scale(&self) -> Scale {
        match self {
            Block::Heading { level, text } => style::heading_scale(*level).max(size_scan(text)),
            Block::Paragraph { text } => size_scan(text),
            Block::UnorderedList { items } | Block::OrderedList { items } => items
                .iter()
                .map(|item| size_scan(&item.text))
                .max()
                .unwrap_or(DEFAULT_SCALE),
            Block::DefinitionList { term, definition } => {
                size_scan(term).max(size_scan(definition))
            }
            _ => DEFAULT_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_scans_to_default() {
        assert_eq!(size_scan("nothing special"), 1);
    }

    #[test]
    fn largest_tag_wins() {
        assert_eq!(size_scan("{large}a{/large} {xxxx-large}b{/xxxx-large}"), 6);
    }

    #[test]
    fn color_tags_do_not_affect_scale() {
        assert_eq!(size_scan("{red}alert{/red}"), 1);
    }

    #[test]
    fn heading_combines_implicit_and_tagged_scale() {
        let h = Block::Heading {
            level: 3,
            text: "plain".to_string(),
        };
        assert_eq!(h.max_scale(), 2);

        let tagged = Block::Heading {
            level: 3,
            text: "{7}huge{/7}".to_string(),
        };
        assert_eq!(tagged.max_scale(), 7);
    }

    #[test]
    fn code_blocks_render_at_body_scale() {
        let block = Block::CodeBlock {
            content: "{7}not markup here{/7}".to_string(),
            language: None,
        };
        assert_eq!(block.max_scale(), 1);
    }
}
