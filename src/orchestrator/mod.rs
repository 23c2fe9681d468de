//! Request-level business logic for clients and sellers.
//!
//! Orchestrators validate payloads, check references and name uniqueness, and delegate
//! persistence to the stores. They hold no state of their own beyond cloneable store handles.

pub mod client;
pub mod error;
pub mod seller;

pub use client::ClientOrchestrator;
pub use error::ApiError;
pub use seller::SellerOrchestrator;
