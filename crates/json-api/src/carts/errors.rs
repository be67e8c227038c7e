//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use pactas_shop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ConcurrentModification => {
            warn!("cart was modified concurrently");

            StatusError::conflict().brief("Cart was modified concurrently")
        }
        CartsServiceError::InvalidFrequency => {
            StatusError::bad_request().brief("Frequency must be at least 1")
        }
        CartsServiceError::PlanVariant(source) => {
            warn!("plan variant lookup failed: {source}");

            StatusError::unprocessable_entity().brief("No product variant for plan")
        }
        CartsServiceError::IncompleteAddress => {
            StatusError::unprocessable_entity().brief("Customer address is incomplete")
        }
        CartsServiceError::Commerce(source) => {
            error!("commerce platform request failed: {source}");

            StatusError::bad_gateway()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use pactas_shop_app::{commerce::CommerceError, domain::products::PlanVariantError};

    use super::*;

    #[test]
    fn domain_errors_map_to_http_statuses() {
        let cases = [
            (CartsServiceError::NotFound, StatusCode::NOT_FOUND),
            (CartsServiceError::ConcurrentModification, StatusCode::CONFLICT),
            (CartsServiceError::InvalidFrequency, StatusCode::BAD_REQUEST),
            (
                CartsServiceError::PlanVariant(PlanVariantError::NotFound("plan-x".to_string())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CartsServiceError::PlanVariant(PlanVariantError::MissingAttribute {
                    attribute: "pactas2",
                    variant_id: 1,
                }),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CartsServiceError::IncompleteAddress, StatusCode::UNPROCESSABLE_ENTITY),
            (
                CartsServiceError::Commerce(CommerceError::Unauthorized),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            let label = error.to_string();

            assert_eq!(into_status_error(error).code, expected, "{label}");
        }
    }
}
