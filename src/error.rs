use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading input pairs or writing results.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: reference line has no hypothesis line", .path.display())]
    UnpairedLine { path: PathBuf, line: usize },
    #[error("{}:{line}: line must start with '{expected}'", .path.display())]
    MissingPrefix {
        path: PathBuf,
        line: usize,
        expected: char,
    },
    #[error("unknown file extension of {}; must be in {{seq,txt}}", .path.display())]
    UnknownExtension { path: PathBuf },
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
