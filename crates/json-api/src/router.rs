//! App Router

use salvo::Router;

use crate::{carts::handlers as carts, products::handlers as products, webhooks};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(Router::with_path("subscription").put(carts::subscription::handler))
                .push(Router::with_path("clear").post(carts::clear::handler))
                .push(Router::with_path("frequency").get(carts::frequency::handler)),
        )
        .push(Router::with_path("product").get(products::get::handler))
        .push(Router::with_path("webhooks/pactas").post(webhooks::pactas::handler))
}
