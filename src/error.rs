use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the profile database.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Failures while copying a picked image into local storage.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open image source {source_ref}: {source}")]
    OpenSource {
        source_ref: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to prepare destination {path}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy image bytes: {0}")]
    Copy(#[source] io::Error),

    #[error("imported image path is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    #[error("failed to move imported image into {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures loading `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Import(#[from] ImportError),
}
