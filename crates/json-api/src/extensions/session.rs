//! Cart session cookie helpers.

use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::{Request, Response},
};
use tracing::debug;

use pactas_shop_app::{commerce::models::CartId, domain::carts::CartSession};

use crate::config::session::SessionConfig;

/// Read the cart session from the request cookies.
pub(crate) trait CartSessionRequestExt {
    fn cart_session(&self, config: &SessionConfig) -> CartSession;
}

impl CartSessionRequestExt for Request {
    fn cart_session(&self, config: &SessionConfig) -> CartSession {
        let Some(cookie) = self.cookie(&config.cookie_name) else {
            return CartSession::new();
        };

        match cookie.value().parse::<CartId>() {
            Ok(cart_id) => CartSession::with_cart_id(cart_id),
            Err(source) => {
                debug!(value = cookie.value(), "ignoring unparsable cart cookie: {source}");

                CartSession::new()
            }
        }
    }
}

/// Write the cart session back as a cookie. A session without a cart expires the cookie.
pub(crate) trait CartSessionResponseExt {
    fn store_cart_session(&mut self, config: &SessionConfig, session: CartSession);
}

impl CartSessionResponseExt for Response {
    fn store_cart_session(&mut self, config: &SessionConfig, session: CartSession) {
        let value = session
            .cart_id()
            .map(|cart_id| cart_id.to_string())
            .unwrap_or_default();

        let mut cookie = Cookie::build((config.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .secure(config.secure)
            .same_site(SameSite::Lax)
            .build();

        if session.cart_id().is_none() {
            cookie.make_removal();
        }

        self.add_cookie(cookie);
    }
}
