use std::collections::BTreeMap;

use serde::Serialize;

/// Direction carried by an alignment directive. The directive applies to
/// the single next rendered block and is then consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlignDirection {
    Center,
    Right,
}

/// One list entry. `depth` is derived from leading indentation and is
/// always >= 0; the source numbering of ordered items is not kept because
/// consumers renumber sequentially from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub text: String,
    pub depth: usize,
}

impl ListItem {
    pub fn new(text: impl Into<String>, depth: usize) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }
}

/// One structural unit of a slide.
///
/// Blocks are self-contained: list items and multi-line fields own their
/// text, so nothing borrows from the source buffer after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        /// 1..=6, the length of the `#` run.
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    CodeBlock {
        content: String,
        language: Option<String>,
    },
    UnorderedList {
        items: Vec<ListItem>,
    },
    OrderedList {
        items: Vec<ListItem>,
    },
    DefinitionList {
        term: String,
        definition: String,
    },
    Blockquote {
        content: String,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Align {
        direction: AlignDirection,
    },
    Image {
        path: String,
        attributes: BTreeMap<String, String>,
    },
    /// A blank source line; a fixed-height spacer for layout estimation.
    Blank,
}
