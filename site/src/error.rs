//! Error types. Everything here is a startup fault; once the page inputs are
//! known, assembling and rendering cannot fail.

use starsite_http::IngressError;
use thiserror::Error;

/// Failure to read from an [`AssetStore`](crate::assets::AssetStore).
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: String },
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum SiteError {
    /// The bundle cannot be read, so its size cannot be reported.
    #[error("asset `{path}` is unavailable")]
    AssetUnavailable {
        path: String,
        #[source]
        source: AssetError,
    },
    #[error("failed to compress build: {0}")]
    Compression(#[source] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("startup task failed: {0}")]
    Startup(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Serve(#[from] IngressError),
}

pub type SiteResult<T> = Result<T, SiteError>;
