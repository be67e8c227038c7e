//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    commerce::{
        CommerceClient,
        actions::CartUpdateAction,
        models::{Cart, CartDraft, CartId, CustomFieldsDraft, ProductProjection, VariantIdentifier},
    },
    domain::{
        carts::{
            errors::CartsServiceError,
            frequency::{
                FREQUENCY_CONTAINER, FREQUENCY_FIELD, FREQUENCY_TYPE_KEY, Frequency,
                frequency_label,
            },
            session::CartSession,
        },
        products::plan_variant,
    },
    pactas::models::{PactasContract, PactasCustomer},
};

/// Currency of every cart the shop creates.
pub const CART_CURRENCY: &str = "EUR";

#[derive(Clone)]
pub struct CommerceCartsService {
    client: Arc<dyn CommerceClient>,
}

impl CommerceCartsService {
    #[must_use]
    pub fn new(client: Arc<dyn CommerceClient>) -> Self {
        Self { client }
    }

    async fn create_session_cart(&self) -> Result<Cart, CartsServiceError> {
        let fields: FxHashMap<String, Value> = [(
            FREQUENCY_FIELD.to_string(),
            Value::String(Frequency::NONE.as_field_value()),
        )]
        .into_iter()
        .collect();

        let draft = CartDraft::new(CART_CURRENCY).with_custom(
            CustomFieldsDraft::of_type_key_and_fields(FREQUENCY_TYPE_KEY, fields),
        );

        let cart = self.client.create_cart(draft).await?;

        debug!(
            cart_id = %cart.id,
            items = cart.line_items.len(),
            frequency = %frequency_label(&cart),
            "created new cart"
        );

        Ok(cart)
    }
}

#[async_trait]
impl CartsService for CommerceCartsService {
    async fn get_or_create_cart(&self, session: CartSession) -> Result<Cart, CartsServiceError> {
        let Some(cart_id) = session.cart_id() else {
            return self.create_session_cart().await;
        };

        match self.client.get_cart(cart_id).await {
            Ok(cart) => {
                debug!(
                    cart_id = %cart.id,
                    items = cart.line_items.len(),
                    frequency = %frequency_label(&cart),
                    "fetched existing cart"
                );

                Ok(cart)
            }
            Err(error) => match CartsServiceError::from(error) {
                CartsServiceError::NotFound => {
                    warn!(%cart_id, "session cart no longer exists, creating a new one");

                    self.create_session_cart().await
                }
                error => Err(error),
            },
        }
    }

    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        let cart = self.client.get_cart(cart).await?;

        debug!(
            cart_id = %cart.id,
            items = cart.line_items.len(),
            frequency = %frequency_label(&cart),
            "fetched cart"
        );

        Ok(cart)
    }

    async fn clear_cart(&self, cart: Cart) -> Result<Cart, CartsServiceError> {
        let cleared_items = if cart.line_items.is_empty() {
            cart
        } else {
            let actions = cart
                .line_items
                .iter()
                .map(CartUpdateAction::remove_line_item)
                .collect();

            self.client
                .update_cart(cart.id, cart.version, actions)
                .await?
        };

        let cleared = self
            .client
            .update_cart(
                cleared_items.id,
                cleared_items.version,
                vec![CartUpdateAction::set_custom_field(
                    FREQUENCY_FIELD,
                    Frequency::NONE.as_field_value(),
                )],
            )
            .await?;

        debug!(
            cart_id = %cleared.id,
            items = cleared.line_items.len(),
            frequency = %frequency_label(&cleared),
            "cleared cart"
        );

        Ok(cleared)
    }

    async fn set_product_to_cart(
        &self,
        cart: Cart,
        variant: VariantIdentifier,
        frequency: Frequency,
    ) -> Result<Cart, CartsServiceError> {
        if frequency.is_none() {
            return Err(CartsServiceError::InvalidFrequency);
        }

        let actions = vec![
            CartUpdateAction::set_custom_field(FREQUENCY_FIELD, frequency.as_field_value()),
            CartUpdateAction::add_line_item(
                variant.product_id,
                variant.variant_id,
                frequency.quantity(),
            ),
        ];

        let updated = self
            .client
            .update_cart(cart.id, cart.version, actions)
            .await?;

        debug!(
            cart_id = %updated.id,
            items = updated.line_items.len(),
            frequency = %frequency_label(&updated),
            "updated cart"
        );

        Ok(updated)
    }

    async fn delete_cart(&self, cart: Cart) -> Result<Cart, CartsServiceError> {
        let deleted = self.client.delete_cart(cart.id, cart.version).await?;

        debug!(cart_id = %deleted.id, "deleted cart");

        Ok(deleted)
    }

    async fn get_frequency(&self, cart: CartId) -> Result<Frequency, CartsServiceError> {
        let object = self
            .client
            .get_custom_object(FREQUENCY_CONTAINER, &cart.to_string())
            .await?;

        let frequency = object.map_or(Frequency::NONE, |object| {
            Frequency::from_value(&object.value)
        });

        debug!(cart_id = %cart, %frequency, "extracted frequency");

        Ok(frequency)
    }

    async fn create_cart_with_pactas_info(
        &self,
        product: ProductProjection,
        contract: PactasContract,
        customer: PactasCustomer,
    ) -> Result<Cart, CartsServiceError> {
        let variant = plan_variant(&product, &contract.plan_variant_id)?;
        let address = customer
            .complete_address()
            .ok_or(CartsServiceError::IncompleteAddress)?;

        let created = self
            .client
            .create_cart(CartDraft::new(CART_CURRENCY))
            .await?;

        debug!(
            cart_id = %created.id,
            contract_id = %contract.id,
            "created new cart with Pactas info"
        );

        let with_item = self
            .client
            .update_cart(
                created.id,
                created.version,
                vec![CartUpdateAction::add_line_item(product.id, variant.id, 1)],
            )
            .await?;

        let cart = self
            .client
            .update_cart(
                with_item.id,
                with_item.version,
                vec![CartUpdateAction::set_shipping_address(address)],
            )
            .await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Fetch the session's cart, or create a new one when the session has none.
    async fn get_or_create_cart(&self, session: CartSession) -> Result<Cart, CartsServiceError>;

    /// Fetch a cart by id, without creating one when it is gone.
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// Remove every line item and reset the frequency.
    async fn clear_cart(&self, cart: Cart) -> Result<Cart, CartsServiceError>;

    /// Add `frequency` units of a variant and record the frequency.
    async fn set_product_to_cart(
        &self,
        cart: Cart,
        variant: VariantIdentifier,
        frequency: Frequency,
    ) -> Result<Cart, CartsServiceError>;

    /// Deletes the given cart.
    async fn delete_cart(&self, cart: Cart) -> Result<Cart, CartsServiceError>;

    /// Frequency stored for a cart, zero when none was stored.
    async fn get_frequency(&self, cart: CartId) -> Result<Frequency, CartsServiceError>;

    /// Create a cart holding the contract's plan variant, shipped to the customer.
    async fn create_cart_with_pactas_info(
        &self,
        product: ProductProjection,
        contract: PactasContract,
        customer: PactasCustomer,
    ) -> Result<Cart, CartsServiceError>;
}
