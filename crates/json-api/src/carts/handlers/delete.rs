//! Delete Cart Handler

use salvo::prelude::*;
use tracing::info;

use pactas_shop_app::domain::carts::{CartSession, CartsServiceError};

use crate::{
    carts::{errors::into_status_error, handlers::get::CartResponse},
    extensions::*,
};

/// Delete Cart Handler
///
/// Deletes the session cart and expires the session cookie.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Session has no cart"),
        (status_code = StatusCode::CONFLICT, description = "Cart was modified concurrently"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Commerce platform unavailable"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(req, depot, res),
    fields(cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;
    let session = req.cart_session(&state.session);

    let Some(cart_id) = session.cart_id() else {
        return Err(StatusError::not_found().brief("Session has no cart"));
    };

    tracing::Span::current().record("cart_id", tracing::field::display(cart_id));

    let cart = match state.app.carts.get_cart(cart_id).await {
        Ok(cart) => cart,
        Err(CartsServiceError::NotFound) => {
            res.store_cart_session(&state.session, CartSession::new());

            return Err(StatusError::not_found().brief("Session cart no longer exists"));
        }
        Err(error) => return Err(into_status_error(error)),
    };

    let deleted = state
        .app
        .carts
        .delete_cart(cart)
        .await
        .map_err(into_status_error)?;

    res.store_cart_session(&state.session, CartSession::new());

    info!(cart_id = %deleted.id, "deleted cart");

    Ok(Json(deleted.into()))
}
