//! Subscriptions service errors.

use thiserror::Error;

use crate::{
    domain::{carts::CartsServiceError, products::ProductsServiceError},
    pactas::PactasError,
};

#[derive(Debug, Error)]
pub enum SubscriptionsServiceError {
    #[error("no subscription product is published")]
    NoProduct,

    #[error("pactas request failed")]
    Pactas(#[from] PactasError),

    #[error("product lookup failed")]
    Products(#[from] ProductsServiceError),

    #[error("cart creation failed")]
    Carts(#[from] CartsServiceError),
}
