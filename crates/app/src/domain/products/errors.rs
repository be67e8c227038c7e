//! Products service errors.

use thiserror::Error;

use crate::commerce::CommerceError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("commerce platform error")]
    Commerce(#[from] CommerceError),
}
