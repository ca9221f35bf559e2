use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading permit documents
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid permit document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
