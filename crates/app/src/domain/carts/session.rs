//! Cart Session

use crate::commerce::models::{Cart, CartId};

/// Name of the session attribute holding the cart id.
pub const CART_ID_SESSION_KEY: &str = "cart_id";

/// Cart related state of a shopper's HTTP session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSession {
    cart_id: Option<CartId>,
}

impl CartSession {
    /// A session without a cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { cart_id: None }
    }

    #[must_use]
    pub const fn with_cart_id(cart_id: CartId) -> Self {
        Self {
            cart_id: Some(cart_id),
        }
    }

    #[must_use]
    pub const fn cart_id(&self) -> Option<CartId> {
        self.cart_id
    }

    /// Remember `cart` for later requests.
    pub fn remember(&mut self, cart: &Cart) {
        self.cart_id = Some(cart.id);
    }
}
