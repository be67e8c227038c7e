//! Webhook Endpoints

pub(crate) mod errors;
pub(crate) mod pactas;
