//! Cart Handlers
//!
//! Every handler works on the cart of the caller's session cookie.

use salvo::prelude::{Request, Response, StatusError};

use pactas_shop_app::commerce::models::Cart;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

pub(crate) mod clear;
pub(crate) mod delete;
pub(crate) mod frequency;
pub(crate) mod get;
pub(crate) mod subscription;

/// Fetch or create the session cart and point the session cookie at it.
pub(super) async fn session_cart(
    state: &State,
    req: &Request,
    res: &mut Response,
) -> Result<Cart, StatusError> {
    let mut session = req.cart_session(&state.session);

    let cart = state
        .app
        .carts
        .get_or_create_cart(session)
        .await
        .map_err(into_status_error)?;

    session.remember(&cart);
    res.store_cart_session(&state.session, session);

    Ok(cart)
}
