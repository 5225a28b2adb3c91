use reqwest::StatusCode;
use thiserror::Error;

use crate::error::Error;

#[derive(Error, Debug)]
pub enum PorkbunProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Rate limited")]
    RateLimited,
}

impl PorkbunProviderError {
    /// Classifies a non-success HTTP reply.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => PorkbunProviderError::InvalidInput(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PorkbunProviderError::Credential(message)
            }
            StatusCode::NOT_FOUND => PorkbunProviderError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => PorkbunProviderError::RateLimited,
            _ => PorkbunProviderError::Provider(format!("HTTP {status}: {message}")),
        }
    }
}

pub fn map_error(e: PorkbunProviderError) -> Error {
    use PorkbunProviderError::*;
    match e {
        Http(err) => Error::Provider(err.to_string()),
        Credential(msg) => Error::Credential(msg),
        NotFound(msg) => Error::NotFound(msg),
        InvalidInput(msg) => Error::InvalidInput(msg),
        Provider(msg) => Error::Provider(msg),
        RateLimited => Error::RateLimited,
    }
}
