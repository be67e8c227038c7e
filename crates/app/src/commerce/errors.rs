//! Commerce client errors.

use thiserror::Error;

use crate::oauth::OAuthError;

#[derive(Debug, Error)]
pub enum CommerceError {
    #[error("resource not found")]
    NotFound,

    #[error("resource was modified concurrently")]
    ConcurrentModification,

    #[error("authentication failed")]
    Authentication(#[from] OAuthError),

    #[error("access token rejected")]
    Unauthorized,

    #[error("http error")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from commerce platform: {0}")]
    UnexpectedResponse(String),
}
