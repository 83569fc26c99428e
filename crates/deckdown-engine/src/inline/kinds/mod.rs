pub mod delimited;
pub mod note;
pub mod tag;
