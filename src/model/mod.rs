//! Persisted entities managed by the resource actors, with their typed identifiers and payloads.

pub mod client;
pub mod seller;

pub use client::*;
pub use seller::*;
