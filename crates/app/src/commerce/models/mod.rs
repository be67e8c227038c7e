//! Commerce platform resources as they appear on the wire.

mod carts;
mod common;
mod products;

pub use carts::*;
pub use common::*;
pub use products::*;
