//! Server configuration module

use clap::Parser;

use crate::config::{
    commerce::CommerceSettings,
    observability::{LoggingConfig, ObservabilityConfig},
    pactas::PactasSettings,
    server::ServerRuntimeConfig,
    session::SessionConfig,
};

pub(crate) mod commerce;
pub(crate) mod observability;
pub(crate) mod pactas;
pub(crate) mod server;
pub(crate) mod session;

/// Pactas Shop JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "pactas-shop-json", about = "Pactas Shop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Commerce platform connection settings.
    #[command(flatten)]
    pub commerce: CommerceSettings,

    /// Pactas connection settings.
    #[command(flatten)]
    pub pactas: PactasSettings,

    /// Cart session cookie settings.
    #[command(flatten)]
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
