//! Pactas Webhook Handler
//!
//! Pactas posts an event for every contract change. New contracts get a cart
//! holding the contracted plan variant.

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{extensions::*, webhooks::errors::into_status_error};

/// Events that start a checkout.
const CHECKOUT_EVENTS: [&str; 2] = ["ContractCreated", "AccountCreated"];

/// Pactas Webhook Event
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PactasEvent {
    /// Event name, e.g. `ContractCreated`
    pub event: String,

    /// Contract the event concerns
    #[serde(default)]
    pub contract_id: Option<String>,

    /// Customer the event concerns
    #[serde(default)]
    pub customer_id: Option<String>,
}

/// Webhook Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WebhookResponse {
    /// Cart created for the contract, absent for ignored events
    pub cart_id: Option<Uuid>,
}

/// Pactas Webhook Handler
#[endpoint(
    tags("webhooks"),
    summary = "Pactas Webhook",
    responses(
        (status_code = StatusCode::OK, description = "Event processed or ignored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Event without contract id"),
        (status_code = StatusCode::NOT_FOUND, description = "Contract or customer not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Contract plan cannot be sold"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Upstream unavailable"),
    ),
)]
#[tracing::instrument(
    name = "webhooks.pactas",
    skip(json, depot),
    fields(event = tracing::field::Empty, contract_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<PactasEvent>,
    depot: &mut Depot,
) -> Result<Json<WebhookResponse>, StatusError> {
    let state = depot.state()?;
    let event = json.into_inner();
    let span = tracing::Span::current();

    span.record("event", event.event.as_str());

    if !CHECKOUT_EVENTS.contains(&event.event.as_str()) {
        debug!(event = %event.event, "ignoring pactas event");

        return Ok(Json(WebhookResponse { cart_id: None }));
    }

    let contract_id = event
        .contract_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("Event has no contract id"))?;

    span.record("contract_id", contract_id.as_str());

    let cart = state
        .app
        .subscriptions
        .checkout_contract(&contract_id)
        .await
        .map_err(into_status_error)?;

    info!(%contract_id, cart_id = %cart.id, "checked out pactas contract");

    Ok(Json(WebhookResponse {
        cart_id: Some(cart.id.into_uuid()),
    }))
}
