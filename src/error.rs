//! Error types for speechsign.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HMAC-SHA256 rejected the signing key")]
    InvalidKey,

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("endpoint has no host: {0}")]
    MissingHost(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
