//! Commerce platform connection settings.

use crate::oauth::ClientCredentials;

/// Configuration for connecting to a commerce platform project.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Project key, the first path segment of every API call.
    pub project_key: String,

    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,

    /// Authorization server base URL, e.g. `"https://auth.europe-west1.gcp.commercetools.com"`.
    pub auth_url: String,

    /// API base URL, e.g. `"https://api.europe-west1.gcp.commercetools.com"`.
    pub api_url: String,
}

impl CommerceConfig {
    pub(crate) fn credentials(&self) -> ClientCredentials {
        ClientCredentials {
            token_url: format!("{}/oauth/token", self.auth_url.trim_end_matches('/')),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            scope: Some(format!("manage_project:{}", self.project_key)),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.project_key,
            path.trim_start_matches('/')
        )
    }
}
