//! Subscriptions
//!
//! Turns contracts signed on Pactas into carts on the commerce platform.

pub mod errors;
pub mod service;

pub use errors::SubscriptionsServiceError;
pub use service::*;
