//! Error types for the fallible edges (timing log, settings file)

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PongError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PongError>;
