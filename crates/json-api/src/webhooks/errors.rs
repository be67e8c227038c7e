//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use pactas_shop_app::{
    domain::subscriptions::SubscriptionsServiceError, pactas::PactasError,
};

pub(crate) fn into_status_error(error: SubscriptionsServiceError) -> StatusError {
    match error {
        SubscriptionsServiceError::NoProduct => {
            warn!("no subscription product is published");

            StatusError::unprocessable_entity().brief("No subscription product is published")
        }
        SubscriptionsServiceError::Pactas(PactasError::NotFound) => {
            StatusError::not_found().brief("Contract or customer not found")
        }
        SubscriptionsServiceError::Pactas(source) => {
            error!("pactas request failed: {source}");

            StatusError::bad_gateway()
        }
        SubscriptionsServiceError::Products(source) => {
            error!("product lookup failed: {source}");

            StatusError::bad_gateway()
        }
        SubscriptionsServiceError::Carts(source) => crate::carts::errors::into_status_error(source),
    }
}
