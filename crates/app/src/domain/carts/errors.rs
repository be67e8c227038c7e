//! Carts service errors.

use thiserror::Error;

use crate::{commerce::CommerceError, domain::products::PlanVariantError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    NotFound,

    #[error("cart was modified concurrently")]
    ConcurrentModification,

    #[error("frequency must be at least 1")]
    InvalidFrequency,

    #[error("plan variant lookup failed")]
    PlanVariant(#[from] PlanVariantError),

    #[error("customer has no complete address")]
    IncompleteAddress,

    #[error("commerce platform error")]
    Commerce(#[source] CommerceError),
}

impl From<CommerceError> for CartsServiceError {
    fn from(error: CommerceError) -> Self {
        match error {
            CommerceError::NotFound => Self::NotFound,
            CommerceError::ConcurrentModification => Self::ConcurrentModification,
            error => Self::Commerce(error),
        }
    }
}
