//! Get Product Handler

use std::collections::BTreeMap;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pactas_shop_app::{
    commerce::models::{ProductProjection, ProductVariant},
    domain::products::variants::{
        PLAN_MONTHLY_ATTRIBUTE, PLAN_TWO_WEEKS_ATTRIBUTE, PLAN_WEEKLY_ATTRIBUTE,
    },
};

use crate::{extensions::*, products::errors::into_status_error};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Localized product names keyed by locale
    pub name: BTreeMap<String, String>,

    /// Master variant first, then the remaining variants
    pub variants: Vec<VariantResponse>,
}

impl From<ProductProjection> for ProductResponse {
    fn from(product: ProductProjection) -> Self {
        Self {
            id: product.id.into_uuid(),
            variants: product.all_variants().map(VariantResponse::from).collect(),
            name: product.name.unwrap_or_default().into_iter().collect(),
        }
    }
}

/// Product Variant Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantResponse {
    /// Variant id within the product
    pub id: u64,

    /// Stock keeping unit
    pub sku: Option<String>,

    /// Pactas plan variant for monthly delivery
    pub monthly_plan: Option<String>,

    /// Pactas plan variant for delivery every two weeks
    pub two_weeks_plan: Option<String>,

    /// Pactas plan variant for weekly delivery
    pub weekly_plan: Option<String>,
}

impl From<&ProductVariant> for VariantResponse {
    fn from(variant: &ProductVariant) -> Self {
        let plan = |name: &str| {
            variant
                .attribute(name)
                .and_then(|attribute| attribute.as_str())
                .map(ToString::to_string)
        };

        Self {
            id: variant.id,
            sku: variant.sku.clone(),
            monthly_plan: plan(PLAN_MONTHLY_ATTRIBUTE),
            two_weeks_plan: plan(PLAN_TWO_WEEKS_ATTRIBUTE),
            weekly_plan: plan(PLAN_WEEKLY_ATTRIBUTE),
        }
    }
}

/// Get Product Handler
///
/// Returns the published subscription product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Subscription product"),
        (status_code = StatusCode::NOT_FOUND, description = "No product is published"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Commerce platform unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state()?;

    let product = state
        .app
        .products
        .get_product()
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("No product is published"))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use pactas_shop_app::{
        commerce::CommerceError,
        domain::products::{MockProductsService, ProductsServiceError},
    };

    use crate::test_helpers::{make_product, product_id, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("product").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product_with_plans() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|| Ok(Some(make_product())));

        let body: ProductResponse = TestClient::get("http://example.com/product")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(body.id, product_id().into_uuid());
        assert_eq!(body.name.get("en").map(String::as_str), Some("Coffee Subscription"));
        assert_eq!(
            body.variants.iter().map(|variant| variant.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            body.variants.last().and_then(|variant| variant.weekly_plan.as_deref()),
            Some("plan-2-weekly")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_without_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|| Ok(None));

        let res = TestClient::get("http://example.com/product")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_upstream_failure_returns_502() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|| Err(ProductsServiceError::Commerce(CommerceError::Unauthorized)));

        let res = TestClient::get("http://example.com/product")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));

        Ok(())
    }
}
