//! Clear Cart Handler

use salvo::prelude::*;

use crate::{
    carts::{
        errors::into_status_error,
        handlers::{get::CartResponse, session_cart},
    },
    extensions::*,
};

/// Clear Cart Handler
///
/// Removes every line item from the session cart and resets its frequency.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::CONFLICT, description = "Cart was modified concurrently"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Commerce platform unavailable"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;

    let cart = session_cart(state, req, res).await?;

    let cleared = state
        .app
        .carts
        .clear_cart(cart)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cleared.into()))
}
