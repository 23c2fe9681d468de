//! Thin axum handlers: extract, call the orchestrator, pick the status code.

pub mod client;
pub mod seller;
