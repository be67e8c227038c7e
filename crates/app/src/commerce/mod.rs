//! Commerce Platform
//!
//! Carts, products and custom objects live on the hosted commerce platform.
//! This module is the only place that talks to it.

pub mod actions;
mod client;
mod config;
mod errors;
pub mod models;

pub use client::*;
pub use config::CommerceConfig;
pub use errors::CommerceError;
