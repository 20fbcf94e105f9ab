// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve one source (a documentation page or the schema).
///
/// Always recoverable at the catalog level: the builder logs it and skips
/// the source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{url} is not valid JSON: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no source registered for {0}")]
    Missing(String),
}

/// Errors that abort a catalog run or an export.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("schema has no \"$defs\" object; no resources can be produced")]
    MissingDefinitions,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid resource identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("could not load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
