//! Get Cart Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pactas_shop_app::{
    commerce::models::{Cart, LineItem, Money},
    domain::carts::{Frequency, cart_frequency},
};

use crate::{carts::handlers::session_cart, extensions::*};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub id: Uuid,

    /// Cart version, bumped by every update
    pub version: u64,

    /// Deliveries per plan period, 0 when no plan was chosen
    pub frequency: u32,

    /// The items in the cart
    pub line_items: Vec<LineItemResponse>,

    /// The cart total
    pub total_price: Option<MoneyResponse>,

    /// The date and time the cart was created
    pub created_at: Option<String>,

    /// The date and time the cart was last modified
    pub last_modified_at: Option<String>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            id: cart.id.into_uuid(),
            version: cart.version,
            frequency: cart_frequency(&cart).unwrap_or(Frequency::NONE).get(),
            total_price: cart.total_price.map(MoneyResponse::from),
            created_at: cart.created_at.map(|at| at.to_string()),
            last_modified_at: cart.last_modified_at.map(|at| at.to_string()),
            line_items: cart
                .line_items
                .into_iter()
                .map(LineItemResponse::from)
                .collect(),
        }
    }
}

/// Cart Line Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    /// The unique identifier of the line item
    pub id: Uuid,

    /// The product of the line item
    pub product_id: Uuid,

    /// The selected product variant
    pub variant_id: Option<u64>,

    /// SKU of the selected product variant
    pub sku: Option<String>,

    /// Number of units
    pub quantity: u64,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        let (variant_id, sku) = item
            .variant
            .map_or((None, None), |variant| (Some(variant.id), variant.sku));

        Self {
            id: item.id.into_uuid(),
            product_id: item.product_id.into_uuid(),
            variant_id,
            sku,
            quantity: item.quantity,
        }
    }
}

/// Money Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MoneyResponse {
    /// ISO 4217 currency code
    pub currency_code: String,

    /// Amount in the smallest currency unit
    pub cent_amount: i64,
}

impl From<Money> for MoneyResponse {
    fn from(money: Money) -> Self {
        Self {
            currency_code: money.currency_code,
            cent_amount: money.cent_amount,
        }
    }
}

/// Get Cart Handler
///
/// Returns the session cart, creating one when the session has none.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Session cart"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Commerce platform unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;

    let cart = session_cart(state, req, res).await?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use pactas_shop_app::{
        commerce::CommerceError,
        domain::carts::{CartsServiceError, MockCartsService},
    };

    use crate::test_helpers::{
        cart_id, carts_service, make_cart, make_cart_with_item, session_cookie,
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_without_cookie_creates_cart_and_sets_cookie() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_or_create_cart()
            .once()
            .withf(|session| session.cart_id().is_none())
            .return_once(|_| Ok(make_cart(cart_id(7), 1)));

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let cookie = session_cookie(&res);
        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(cookie, Some(cart_id(7).to_string()));
        assert_eq!(body.id, cart_id(7).into_uuid());
        assert_eq!(body.frequency, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_with_cookie_fetches_session_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_or_create_cart()
            .once()
            .withf(|session| session.cart_id() == Some(cart_id(3)))
            .return_once(|_| Ok(make_cart_with_item(cart_id(3), 4, 2)));

        let mut res = TestClient::get("http://example.com/cart")
            .add_header(COOKIE, format!("cart_id={}", cart_id(3)), true)
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.version, 4);
        assert_eq!(body.frequency, 2);
        assert_eq!(body.line_items.len(), 1);
        assert_eq!(body.line_items.first().map(|item| item.quantity), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_upstream_failure_returns_502() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_or_create_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::Commerce(CommerceError::Unauthorized)));

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }
}
