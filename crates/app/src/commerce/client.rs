//! Commerce platform HTTP client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    commerce::{
        CommerceConfig, CommerceError,
        actions::{CartUpdate, CartUpdateAction},
        models::{Cart, CartDraft, CartId, CustomObject, PagedQueryResult, ProductProjection},
    },
    oauth::TokenCache,
};

#[automock]
#[async_trait]
pub trait CommerceClient: Send + Sync {
    /// Fetch a cart by id.
    async fn get_cart(&self, id: CartId) -> Result<Cart, CommerceError>;

    /// Create a new cart.
    async fn create_cart(&self, draft: CartDraft) -> Result<Cart, CommerceError>;

    /// Apply update actions to the cart at the given version.
    async fn update_cart(
        &self,
        id: CartId,
        version: u64,
        actions: Vec<CartUpdateAction>,
    ) -> Result<Cart, CommerceError>;

    /// Delete the cart at the given version.
    async fn delete_cart(&self, id: CartId, version: u64) -> Result<Cart, CommerceError>;

    /// Query published product projections.
    async fn query_current_products(
        &self,
        limit: u32,
    ) -> Result<PagedQueryResult<ProductProjection>, CommerceError>;

    /// Fetch a custom object, `None` when it does not exist.
    async fn get_custom_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<CustomObject>, CommerceError>;
}

/// [`CommerceClient`] speaking the platform's REST API.
#[derive(Debug)]
pub struct HttpCommerceClient {
    config: CommerceConfig,
    http: Client,
    tokens: TokenCache,
}

impl HttpCommerceClient {
    #[must_use]
    pub fn new(config: CommerceConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    #[must_use]
    pub fn with_http_client(config: CommerceConfig, http: Client) -> Self {
        Self {
            config,
            http,
            tokens: TokenCache::new(),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CommerceError> {
        let authorization = self
            .tokens
            .get_or_request(&self.http, &self.config.credentials())
            .await?;

        let response = request
            .bearer_auth(&authorization.access_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(CommerceError::NotFound),
            StatusCode::CONFLICT => Err(CommerceError::ConcurrentModification),
            StatusCode::UNAUTHORIZED => {
                warn!("commerce platform rejected access token, dropping it");

                self.tokens.invalidate().await;

                Err(CommerceError::Unauthorized)
            }
            status => {
                let text = response.text().await.unwrap_or_default();

                Err(CommerceError::UnexpectedResponse(format!(
                    "request failed with status {status}: {text}"
                )))
            }
        }
    }
}

#[async_trait]
impl CommerceClient for HttpCommerceClient {
    async fn get_cart(&self, id: CartId) -> Result<Cart, CommerceError> {
        debug!(cart_id = %id, "fetching cart");

        self.send(self.http.get(self.config.endpoint(&format!("carts/{id}"))))
            .await
    }

    async fn create_cart(&self, draft: CartDraft) -> Result<Cart, CommerceError> {
        debug!(currency = %draft.currency, "creating cart");

        self.send(self.http.post(self.config.endpoint("carts")).json(&draft))
            .await
    }

    async fn update_cart(
        &self,
        id: CartId,
        version: u64,
        actions: Vec<CartUpdateAction>,
    ) -> Result<Cart, CommerceError> {
        debug!(cart_id = %id, version, actions = actions.len(), "updating cart");

        let body = CartUpdate {
            version,
            actions: &actions,
        };

        self.send(
            self.http
                .post(self.config.endpoint(&format!("carts/{id}")))
                .json(&body),
        )
        .await
    }

    async fn delete_cart(&self, id: CartId, version: u64) -> Result<Cart, CommerceError> {
        debug!(cart_id = %id, version, "deleting cart");

        self.send(
            self.http
                .delete(self.config.endpoint(&format!("carts/{id}")))
                .query(&[("version", version)]),
        )
        .await
    }

    async fn query_current_products(
        &self,
        limit: u32,
    ) -> Result<PagedQueryResult<ProductProjection>, CommerceError> {
        self.send(
            self.http
                .get(self.config.endpoint("product-projections"))
                .query(&[("staged", "false")])
                .query(&[("limit", limit)]),
        )
        .await
    }

    async fn get_custom_object(
        &self,
        container: &str,
        key: &str,
    ) -> Result<Option<CustomObject>, CommerceError> {
        let request = self
            .http
            .get(self.config.endpoint(&format!("custom-objects/{container}/{key}")));

        match self.send(request).await {
            Ok(object) => Ok(Some(object)),
            Err(CommerceError::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }
}
