//! Catalog loading errors

use std::path::PathBuf;

/// Fatal errors raised while building a catalog from seed data
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate agent name: {0}")]
    DuplicateAgent(String),

    #[error("Duplicate map name: {0}")]
    DuplicateMap(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
