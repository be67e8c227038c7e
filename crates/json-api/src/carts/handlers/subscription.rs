//! Set Subscription Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use pactas_shop_app::{
    commerce::models::{ProductId, VariantIdentifier},
    domain::carts::Frequency,
};

use crate::{
    carts::{
        errors::into_status_error,
        handlers::{get::CartResponse, session_cart},
    },
    extensions::*,
};

/// Set Subscription Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetSubscriptionRequest {
    /// Subscription product
    pub product_id: Uuid,

    /// Variant of the product to deliver
    pub variant_id: u64,

    /// Deliveries per plan period, at least 1
    pub frequency: u32,
}

/// Set Subscription Handler
///
/// Replaces the contents of the session cart with `frequency` units of one variant.
#[endpoint(
    tags("carts"),
    summary = "Set Cart Subscription",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Cart was modified concurrently"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Commerce platform unavailable"),
    ),
)]
#[tracing::instrument(
    name = "carts.subscription",
    skip(json, req, depot, res),
    fields(cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<SetSubscriptionRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();
    let frequency = Frequency::new(request.frequency);

    if frequency.is_none() {
        return Err(StatusError::bad_request().brief("Frequency must be at least 1"));
    }

    let cart = session_cart(state, req, res).await?;

    tracing::Span::current().record("cart_id", tracing::field::display(cart.id));

    let cleared = state
        .app
        .carts
        .clear_cart(cart)
        .await
        .map_err(into_status_error)?;

    let variant = VariantIdentifier {
        product_id: ProductId::from_uuid(request.product_id),
        variant_id: request.variant_id,
    };

    let updated = state
        .app
        .carts
        .set_product_to_cart(cleared, variant, frequency)
        .await
        .map_err(into_status_error)?;

    info!(cart_id = %updated.id, %frequency, "set cart subscription");

    Ok(Json(updated.into()))
}
