//! Crate error type.

use std::io;
use std::path::{Path, PathBuf};

/// Everything that can stop a tokenization run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Index line without the `" - "` separator. `line` is 1-based.
    #[error("malformed index line {line}: {content:?} (expected \"<name> - <rest>\")")]
    MalformedIndexLine { line: usize, content: String },

    #[error("no stopword list for language {0:?}")]
    UnknownLanguage(String),

    #[error("lemmatizer failed: {0}")]
    Lemmatizer(String),

    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Attach the path an I/O error happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the underlying cause is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
