//! Cart Frequency Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pactas_shop_app::domain::carts::Frequency;

use crate::{carts::errors::into_status_error, extensions::*};

/// Frequency Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FrequencyResponse {
    /// Deliveries per plan period stored for the session cart, 0 when none
    pub frequency: u32,
}

/// Cart Frequency Handler
///
/// Reads the frequency stored for the session cart. A session without a
/// cart reads as 0.
#[endpoint(
    tags("carts"),
    summary = "Get Cart Frequency",
    responses(
        (status_code = StatusCode::OK, description = "Stored frequency"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Commerce platform unavailable"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<FrequencyResponse>, StatusError> {
    let state = depot.state()?;

    let frequency = match req.cart_session(&state.session).cart_id() {
        Some(cart_id) => state
            .app
            .carts
            .get_frequency(cart_id)
            .await
            .map_err(into_status_error)?,
        None => Frequency::NONE,
    };

    Ok(Json(FrequencyResponse {
        frequency: frequency.get(),
    }))
}
