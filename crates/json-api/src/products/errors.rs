//! Errors

use salvo::http::StatusError;
use tracing::error;

use pactas_shop_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Commerce(source) => {
            error!("failed to load product: {source}");

            StatusError::bad_gateway()
        }
    }
}
