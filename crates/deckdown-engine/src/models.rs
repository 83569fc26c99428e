use serde::Serialize;

use crate::blocks::{Block, parse_slide};
use crate::split::split;

/// An ordered, immutable sequence of blocks parsed from one document
/// chunk. Navigation state lives in the presentation layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub blocks: Vec<Block>,
}

impl Slide {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Text of the first heading, if the slide has one.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// A full parsed presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Splits and parses a whole document. The result always has at
    /// least one slide, possibly empty.
    pub fn parse(text: &str) -> Self {
        Self {
            slides: split(text).iter().map(|chunk| parse_slide(chunk)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
