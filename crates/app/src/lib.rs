//! Shop application domain and platform clients.

pub mod commerce;
pub mod context;
pub mod domain;
pub mod oauth;
pub mod pactas;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
