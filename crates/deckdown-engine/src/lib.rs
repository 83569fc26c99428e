pub mod blocks;
pub mod inline;
pub mod io;
pub mod layout;
pub mod models;
pub mod split;
pub mod style;
pub mod width;

// Re-export key types for easier usage
pub use blocks::{AlignDirection, Block, ListItem, parse_slide};
pub use inline::{Segment, SegmentKind, parse_inline};
pub use layout::wrap;
pub use models::{Deck, Slide};
pub use split::split;
pub use style::{Color, Scale, TagStyle, resolve_tag};
pub use width::{display_width, str_width};
