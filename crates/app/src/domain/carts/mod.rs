//! Carts

pub mod errors;
pub mod frequency;
pub mod service;
pub mod session;

pub use errors::CartsServiceError;
pub use frequency::{Frequency, cart_frequency};
pub use service::*;
pub use session::CartSession;
