//! Pactas Config

use clap::Args;

use pactas_shop_app::pactas::PactasConfig;

/// Pactas API settings.
#[derive(Debug, Args)]
pub struct PactasSettings {
    /// Pactas base URL
    #[arg(
        long = "pactas-base-url",
        env = "PACTAS_BASE_URL",
        default_value = "https://sandbox.pactas.com"
    )]
    pub base_url: String,

    /// Pactas OAuth client id
    #[arg(id = "pactas_client_id", long = "pactas-client-id", env = "PACTAS_CLIENT_ID")]
    pub client_id: String,

    /// Pactas OAuth client secret
    #[arg(
        id = "pactas_client_secret",
        long = "pactas-client-secret",
        env = "PACTAS_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: String,
}

impl PactasSettings {
    #[must_use]
    pub fn into_pactas_config(self) -> PactasConfig {
        PactasConfig {
            base_url: self.base_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
        }
    }
}
