use thiserror::Error;

use crate::http_client;

#[derive(Debug, Error)]
pub enum InstagramError {
    #[error("HTTP error: {0}")]
    Http(#[from] http_client::Error),

    /// The endpoint answered 200 but the body was not the expected profile payload.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The handle cannot be expressed as a single path segment (`.` or `..`).
    #[error("Invalid handle: {0:?}")]
    InvalidHandle(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InstagramError>;
