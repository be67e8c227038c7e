//! Pactas
//!
//! Contracts and customers of the subscription platform.

mod client;
mod errors;
pub mod models;

pub use client::*;
pub use errors::PactasError;
