use std::path::PathBuf;

use thiserror::Error;

/// Failures at the field-list boundary. Generation itself cannot fail.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON field list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML field list: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported field list format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
