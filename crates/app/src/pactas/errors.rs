//! Pactas client errors.

use thiserror::Error;

use crate::oauth::OAuthError;

/// Errors that can occur when communicating with Pactas.
#[derive(Debug, Error)]
pub enum PactasError {
    /// The requested contract or customer does not exist.
    #[error("pactas resource not found")]
    NotFound,

    /// No access token could be obtained.
    #[error("pactas authorization failed")]
    Authorization(#[from] OAuthError),

    /// An HTTP transport or serialization error occurred.
    #[error("http error")]
    Http(#[from] reqwest::Error),

    /// Pactas returned a non-2xx response.
    #[error("unexpected response from Pactas: {0}")]
    UnexpectedResponse(String),
}
