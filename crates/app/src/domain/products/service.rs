//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    commerce::{CommerceClient, models::ProductProjection},
    domain::products::errors::ProductsServiceError,
};

#[derive(Clone)]
pub struct CommerceProductsService {
    client: Arc<dyn CommerceClient>,
}

impl CommerceProductsService {
    #[must_use]
    pub fn new(client: Arc<dyn CommerceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for CommerceProductsService {
    async fn get_product(&self) -> Result<Option<ProductProjection>, ProductsServiceError> {
        let product = self.client.query_current_products(1).await?.into_head();

        debug!(
            product_id = ?product.as_ref().map(|product| product.id),
            "fetched subscription product"
        );

        Ok(product)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// The subscription product, i.e. the first published product.
    async fn get_product(&self) -> Result<Option<ProductProjection>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        commerce::{CommerceError, MockCommerceClient, models::PagedQueryResult},
        test::fixtures,
    };

    use super::*;

    fn page(results: Vec<ProductProjection>) -> PagedQueryResult<ProductProjection> {
        PagedQueryResult {
            limit: 1,
            offset: 0,
            count: u32::try_from(results.len()).unwrap_or(u32::MAX),
            total: None,
            results,
        }
    }

    #[tokio::test]
    async fn get_product_returns_first_published_product() -> TestResult {
        let product = fixtures::subscription_product();
        let expected = product.clone();

        let mut client = MockCommerceClient::new();

        client
            .expect_query_current_products()
            .once()
            .withf(|limit| *limit == 1)
            .return_once(move |_| Ok(page(vec![product])));

        let service = CommerceProductsService::new(Arc::new(client));

        assert_eq!(service.get_product().await?, Some(expected));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_without_products_is_none() -> TestResult {
        let mut client = MockCommerceClient::new();

        client
            .expect_query_current_products()
            .once()
            .return_once(|_| Ok(page(Vec::new())));

        let service = CommerceProductsService::new(Arc::new(client));

        assert_eq!(service.get_product().await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_propagates_platform_errors() {
        let mut client = MockCommerceClient::new();

        client
            .expect_query_current_products()
            .once()
            .return_once(|_| Err(CommerceError::Unauthorized));

        let service = CommerceProductsService::new(Arc::new(client));

        let result = service.get_product().await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Commerce(CommerceError::Unauthorized))
            ),
            "expected Commerce error, got {result:?}"
        );
    }
}
