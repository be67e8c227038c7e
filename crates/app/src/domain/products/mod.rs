//! Products

pub mod errors;
pub mod service;
pub mod variants;

pub use errors::ProductsServiceError;
pub use service::*;
pub use variants::{PlanVariantError, plan_variant};
