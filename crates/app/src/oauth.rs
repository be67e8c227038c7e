//! OAuth2 client credentials grant and access token caching.
//!
//! Both the commerce platform and Pactas authenticate API calls with bearer
//! tokens obtained through the client credentials grant.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Client credentials used to obtain an access token.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    /// Token endpoint, e.g. `"https://auth.example.com/oauth/token"`.
    pub token_url: String,

    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,

    /// Optional scope requested with the token.
    pub scope: Option<String>,
}

/// Access token granted by an authorization server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub access_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Errors raised while requesting an access token.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The authorization server refused to issue a token.
    #[error("token request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Request a fresh token with the client credentials grant.
///
/// # Errors
///
/// Returns an error on HTTP failure, a non-2xx response or a malformed body.
pub async fn request_token(
    http: &Client,
    credentials: &ClientCredentials,
) -> Result<Authorization, OAuthError> {
    let mut form = vec![("grant_type", "client_credentials")];

    if let Some(scope) = credentials.scope.as_deref() {
        form.push(("scope", scope));
    }

    let response = http
        .post(&credentials.token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&form)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        return Err(OAuthError::Rejected { status, body });
    }

    Ok(response.json().await?)
}

#[derive(Debug, Clone)]
struct CachedToken {
    authorization: Authorization,
    expires_at: Instant,
}

/// Holds the most recent access token until shortly before it expires.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    token: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the cached authorization when it is still usable.
    pub(crate) async fn current(&self) -> Option<Authorization> {
        let guard = self.token.read().await;

        guard
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now() + EXPIRY_MARGIN)
            .map(|cached| cached.authorization.clone())
    }

    pub(crate) async fn store(&self, authorization: Authorization) {
        let expires_at = Instant::now() + Duration::from_secs(authorization.expires_in);

        debug!(
            expires_in = authorization.expires_in,
            "cached access token"
        );

        *self.token.write().await = Some(CachedToken {
            authorization,
            expires_at,
        });
    }

    pub(crate) async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    /// Return a usable authorization, requesting a new one when needed.
    pub(crate) async fn get_or_request(
        &self,
        http: &Client,
        credentials: &ClientCredentials,
    ) -> Result<Authorization, OAuthError> {
        if let Some(authorization) = self.current().await {
            return Ok(authorization);
        }

        let authorization = request_token(http, credentials).await?;

        self.store(authorization.clone()).await;

        Ok(authorization)
    }
}
