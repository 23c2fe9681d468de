//! Typed stores wrapping the generic [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each store inherits `find`, `list`, `list_filtered`, `delete` and `is_unique` from
//! [`EntityStore`](resource_actor::EntityStore) and adds the entity-specific `save`.

pub mod client_store;
pub mod seller_store;

pub use client_store::*;
pub use seller_store::*;
