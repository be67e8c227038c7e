//! Subscriptions service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    commerce::models::Cart,
    domain::{
        carts::CartsService, products::ProductsService,
        subscriptions::errors::SubscriptionsServiceError,
    },
    pactas::Pactas,
};

#[derive(Clone)]
pub struct PactasSubscriptionsService {
    pactas: Arc<dyn Pactas>,
    products: Arc<dyn ProductsService>,
    carts: Arc<dyn CartsService>,
}

impl PactasSubscriptionsService {
    #[must_use]
    pub fn new(
        pactas: Arc<dyn Pactas>,
        products: Arc<dyn ProductsService>,
        carts: Arc<dyn CartsService>,
    ) -> Self {
        Self {
            pactas,
            products,
            carts,
        }
    }
}

#[async_trait]
impl SubscriptionsService for PactasSubscriptionsService {
    async fn checkout_contract(&self, contract_id: &str) -> Result<Cart, SubscriptionsServiceError> {
        let contract = self.pactas.fetch_contract(contract_id).await?;
        let customer = self.pactas.fetch_customer(&contract.customer_id).await?;

        let product = self
            .products
            .get_product()
            .await?
            .ok_or(SubscriptionsServiceError::NoProduct)?;

        let cart = self
            .carts
            .create_cart_with_pactas_info(product, contract, customer)
            .await?;

        info!(contract_id, cart_id = %cart.id, "created cart for Pactas contract");

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait SubscriptionsService: Send + Sync {
    /// Build the cart for a contract signed on Pactas.
    async fn checkout_contract(&self, contract_id: &str) -> Result<Cart, SubscriptionsServiceError>;
}
