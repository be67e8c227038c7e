//! Commerce Platform Config

use clap::Args;

use pactas_shop_app::commerce::CommerceConfig;

/// Commerce platform API settings.
#[derive(Debug, Args)]
pub struct CommerceSettings {
    /// Commerce project key
    #[arg(long = "commerce-project-key", env = "COMMERCE_PROJECT_KEY")]
    pub project_key: String,

    /// Commerce API client id
    #[arg(id = "commerce_client_id", long = "commerce-client-id", env = "COMMERCE_CLIENT_ID")]
    pub client_id: String,

    /// Commerce API client secret
    #[arg(
        id = "commerce_client_secret",
        long = "commerce-client-secret",
        env = "COMMERCE_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: String,

    /// Commerce authorization server URL
    #[arg(
        long = "commerce-auth-url",
        env = "COMMERCE_AUTH_URL",
        default_value = "https://auth.europe-west1.gcp.commercetools.com"
    )]
    pub auth_url: String,

    /// Commerce API URL
    #[arg(
        long = "commerce-api-url",
        env = "COMMERCE_API_URL",
        default_value = "https://api.europe-west1.gcp.commercetools.com"
    )]
    pub api_url: String,
}

impl CommerceSettings {
    #[must_use]
    pub fn into_commerce_config(self) -> CommerceConfig {
        CommerceConfig {
            project_key: self.project_key,
            client_id: self.client_id,
            client_secret: self.client_secret,
            auth_url: self.auth_url,
            api_url: self.api_url,
        }
    }
}
