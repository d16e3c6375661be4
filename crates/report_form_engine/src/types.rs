use std::path::PathBuf;

use crate::{CatalogListing, PersistError};

#[derive(Debug)]
pub enum EngineEvent {
    CatalogLoaded(Result<CatalogListing, CatalogLoadError>),
    ReportGenerated(Result<String, GenerationError>),
    ReportDownloaded(Result<PathBuf, DownloadError>),
    StatusTick { generation: u64 },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogLoadError {
    #[error("catalog request failed with http status {0}")]
    HttpStatus(u16),
    #[error("catalog request failed: {0}")]
    Network(String),
    #[error("catalog payload malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The server refused the request and said why.
    #[error("report rejected: {0}")]
    Rejected(String),
    /// Transport failure or a response without a usable message.
    #[error("report request failed: {0}")]
    Unknown(String),
}

impl GenerationError {
    /// Message fit for the user, if the server supplied one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            GenerationError::Rejected(message) => Some(message),
            GenerationError::Unknown(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("invalid download url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
