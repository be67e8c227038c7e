//! Pactas API client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    oauth::{self, ClientCredentials, TokenCache},
    pactas::{
        PactasError,
        models::{Authorization, PactasContract, PactasCustomer},
    },
};

/// Configuration for connecting to Pactas.
#[derive(Debug, Clone)]
pub struct PactasConfig {
    /// Pactas base URL, e.g. `"https://sandbox.pactas.com"`.
    pub base_url: String,

    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,
}

impl PactasConfig {
    fn credentials(&self) -> ClientCredentials {
        ClientCredentials {
            token_url: format!("{}/oauth/token", self.base_url.trim_end_matches('/')),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            scope: None,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Communication with the Pactas subscription platform.
#[automock]
#[async_trait]
pub trait Pactas: Send + Sync {
    /// Authorization used to authenticate subsequent requests.
    async fn fetch_authorization(&self) -> Result<Authorization, PactasError>;

    /// Contract identified by `contract_id`.
    async fn fetch_contract(&self, contract_id: &str) -> Result<PactasContract, PactasError>;

    /// Customer identified by `customer_id`.
    async fn fetch_customer(&self, customer_id: &str) -> Result<PactasCustomer, PactasError>;
}

/// HTTP client for the Pactas REST API.
#[derive(Debug)]
pub struct HttpPactasClient {
    config: PactasConfig,
    http: Client,
    tokens: TokenCache,
}

impl HttpPactasClient {
    #[must_use]
    pub fn new(config: PactasConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    #[must_use]
    pub fn with_http_client(config: PactasConfig, http: Client) -> Self {
        Self {
            config,
            http,
            tokens: TokenCache::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, PactasError> {
        let authorization = self.fetch_authorization().await?;

        let response = self
            .http
            .get(self.config.endpoint(path))
            .bearer_auth(&authorization.access_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(PactasError::NotFound),
            status => {
                if status == StatusCode::UNAUTHORIZED {
                    self.tokens.invalidate().await;
                }

                let text = response.text().await.unwrap_or_default();

                Err(PactasError::UnexpectedResponse(format!(
                    "{path} request failed with status {status}: {text}"
                )))
            }
        }
    }
}

#[async_trait]
impl Pactas for HttpPactasClient {
    async fn fetch_authorization(&self) -> Result<Authorization, PactasError> {
        if let Some(authorization) = self.tokens.current().await {
            return Ok(authorization);
        }

        debug!("requesting Pactas authorization");

        let authorization = oauth::request_token(&self.http, &self.config.credentials()).await?;

        self.tokens.store(authorization.clone()).await;

        Ok(authorization)
    }

    async fn fetch_contract(&self, contract_id: &str) -> Result<PactasContract, PactasError> {
        let contract: PactasContract = self.get(&format!("contracts/{contract_id}")).await?;

        debug!(
            contract_id,
            plan_variant_id = %contract.plan_variant_id,
            "fetched Pactas contract"
        );

        Ok(contract)
    }

    async fn fetch_customer(&self, customer_id: &str) -> Result<PactasCustomer, PactasError> {
        let customer = self.get(&format!("customers/{customer_id}")).await?;

        debug!(customer_id, "fetched Pactas customer");

        Ok(customer)
    }
}
