use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to bring a document into memory. Everything past this point
/// is total over strings, so this is the engine's only fallible surface.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

/// Reads a presentation source file as UTF-8 text.
pub fn load_document(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
