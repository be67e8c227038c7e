//! App Context

use std::{sync::Arc, time::Duration};

use reqwest::Client;
use thiserror::Error;

use crate::{
    commerce::{CommerceClient, CommerceConfig, HttpCommerceClient},
    domain::{
        carts::{CartsService, CommerceCartsService},
        products::{CommerceProductsService, ProductsService},
        subscriptions::{PactasSubscriptionsService, SubscriptionsService},
    },
    pactas::{HttpPactasClient, Pactas, PactasConfig},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub products: Arc<dyn ProductsService>,
    pub subscriptions: Arc<dyn SubscriptionsService>,
}

impl AppContext {
    /// Build application context talking to the commerce platform and Pactas.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(commerce: CommerceConfig, pactas: PactasConfig) -> Result<Self, AppInitError> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppInitError::HttpClient)?;

        Ok(Self::from_clients(
            Arc::new(HttpCommerceClient::with_http_client(commerce, http.clone())),
            Arc::new(HttpPactasClient::with_http_client(pactas, http)),
        ))
    }

    /// Wire the domain services on top of existing platform clients.
    #[must_use]
    pub fn from_clients(commerce: Arc<dyn CommerceClient>, pactas: Arc<dyn Pactas>) -> Self {
        let carts: Arc<dyn CartsService> = Arc::new(CommerceCartsService::new(commerce.clone()));
        let products: Arc<dyn ProductsService> =
            Arc::new(CommerceProductsService::new(commerce));

        Self {
            subscriptions: Arc::new(PactasSubscriptionsService::new(
                pactas,
                products.clone(),
                carts.clone(),
            )),
            carts,
            products,
        }
    }
}
