//! Test helpers.

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    http::{cookie::Cookie, header::SET_COOKIE},
    prelude::*,
};
use serde_json::json;
use uuid::Uuid;

use pactas_shop_app::{
    TypedUuid,
    commerce::models::{
        Attribute, Cart, CartId, CartState, CustomFields, LineItem, Money, ProductId,
        ProductProjection, ProductVariant, ResourceIdentifier,
    },
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            frequency::{FREQUENCY_FIELD, FREQUENCY_TYPE_KEY},
            session::CART_ID_SESSION_KEY,
        },
        products::{
            MockProductsService,
            variants::{PLAN_MONTHLY_ATTRIBUTE, PLAN_TWO_WEEKS_ATTRIBUTE, PLAN_WEEKLY_ATTRIBUTE},
        },
        subscriptions::MockSubscriptionsService,
    },
};

use crate::{config::session::SessionConfig, state::State};

pub(crate) fn cart_id(n: u128) -> CartId {
    CartId::from_uuid(Uuid::from_u128(n))
}

fn frequency_fields(frequency: u32) -> CustomFields {
    CustomFields {
        type_ref: ResourceIdentifier::type_by_key(FREQUENCY_TYPE_KEY),
        fields: [(FREQUENCY_FIELD.to_string(), json!(frequency.to_string()))]
            .into_iter()
            .collect(),
    }
}

pub(crate) fn make_cart(id: CartId, version: u64) -> Cart {
    Cart {
        id,
        version,
        line_items: Vec::new(),
        total_price: None,
        custom: Some(frequency_fields(0)),
        shipping_address: None,
        cart_state: Some(CartState::Active),
        created_at: None,
        last_modified_at: None,
    }
}

/// A cart holding one unit per delivery of variant 2.
pub(crate) fn make_cart_with_item(id: CartId, version: u64, frequency: u32) -> Cart {
    Cart {
        line_items: vec![LineItem {
            id: TypedUuid::from_uuid(Uuid::from_u128(0x1001)),
            product_id: product_id(),
            name: None,
            variant: Some(plan_variant(2)),
            quantity: u64::from(frequency),
        }],
        total_price: Some(Money {
            currency_code: "EUR".to_string(),
            cent_amount: 1290,
        }),
        custom: Some(frequency_fields(frequency)),
        ..make_cart(id, version)
    }
}

pub(crate) fn product_id() -> ProductId {
    ProductId::from_uuid(Uuid::from_u128(0x00ff))
}

fn plan_variant(n: u64) -> ProductVariant {
    let attribute = |name: &str, plan: &str| Attribute {
        name: name.to_string(),
        value: json!(format!("plan-{n}-{plan}")),
    };

    ProductVariant {
        id: n,
        sku: Some(format!("coffee-{n}")),
        attributes: vec![
            attribute(PLAN_MONTHLY_ATTRIBUTE, "monthly"),
            attribute(PLAN_TWO_WEEKS_ATTRIBUTE, "two-weeks"),
            attribute(PLAN_WEEKLY_ATTRIBUTE, "weekly"),
        ],
    }
}

pub(crate) fn make_product() -> ProductProjection {
    ProductProjection {
        id: product_id(),
        version: 1,
        name: Some(
            [("en".to_string(), "Coffee Subscription".to_string())]
                .into_iter()
                .collect(),
        ),
        master_variant: plan_variant(1),
        variants: vec![plan_variant(2)],
    }
}

/// Value of the session cookie the response sets.
pub(crate) fn session_cookie(res: &Response) -> Option<String> {
    if let Some(cookie) = res.cookie(CART_ID_SESSION_KEY) {
        return Some(cookie.value().to_string());
    }

    res.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| Cookie::parse(value.to_string()).ok())
        .find(|cookie| cookie.name() == CART_ID_SESSION_KEY)
        .map(|cookie| cookie.value().to_string())
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_or_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_clear_cart().never();
    carts.expect_set_product_to_cart().never();
    carts.expect_delete_cart().never();
    carts.expect_get_frequency().never();
    carts.expect_create_cart_with_pactas_info().never();

    carts
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_get_product().never();

    products
}

fn strict_subscriptions_mock() -> MockSubscriptionsService {
    let mut subscriptions = MockSubscriptionsService::new();

    subscriptions.expect_checkout_contract().never();

    subscriptions
}

fn state(
    carts: MockCartsService,
    products: MockProductsService,
    subscriptions: MockSubscriptionsService,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            carts: Arc::new(carts),
            products: Arc::new(products),
            subscriptions: Arc::new(subscriptions),
        },
        SessionConfig::default(),
    )
}

fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Serve `route` on top of a real app context.
pub(crate) fn app_service(app: AppContext, route: Router) -> Service {
    service_with_state(
        State::from_app_context(app, SessionConfig::default()),
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with_state(
        state(carts, strict_products_mock(), strict_subscriptions_mock()),
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with_state(
        state(strict_carts_mock(), products, strict_subscriptions_mock()),
        route,
    )
}

pub(crate) fn subscriptions_service(
    subscriptions: MockSubscriptionsService,
    route: Router,
) -> Service {
    service_with_state(
        state(strict_carts_mock(), strict_products_mock(), subscriptions),
        route,
    )
}
