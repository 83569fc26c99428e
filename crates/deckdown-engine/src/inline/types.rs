use serde::Serialize;

/// The styling applied to one run of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    /// Plain text that isn't part of any special construct.
    Text,
    Bold,
    Italic,
    Strikethrough,
    /// Inline code (backtick-delimited); no parsing happens inside.
    Code,
    /// A size or color tag. Carries the raw attribute name; resolution
    /// against the style tables happens at consumption time.
    Tag { name: String },
    /// A speaker note. Present in the source, excluded from the default
    /// visible rendering path; callers decide whether to show it.
    Note,
}

/// One styled run of inline text. A tokenization is a flat, ordered list
/// of segments whose payloads concatenate back to the visible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Text, text)
    }

    pub fn tag(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            SegmentKind::Tag { name: name.into() },
            text,
        )
    }
}
