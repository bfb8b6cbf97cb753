use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading documents and parsing index descriptions.
/// Grouping itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("invalid character index: {0}")]
    CharIndex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
