//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that hides the module
//! prefix (`with_target(false)`); the actor loop records `entity_type` and the entity id as
//! structured fields instead.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured default
//! (`log.filter`, `info` unless overridden).
//!
//! ```bash
//! # Default filter from config
//! cargo run
//!
//! # Full payloads and store requests
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP trace layer
//! RUST_LOG=tower_http=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, creating a seller and one of its clients logs:
//!
//! ```text
//! INFO Created entity_type="Seller" id=seller_1 size=1
//! INFO Created entity_type="Client" id=client_1 size=1
//! ```
//!
//! Deleting that seller additionally reports the detached clients:
//!
//! ```text
//! INFO Detached clients from deleted seller seller_id=seller_1 detached=1
//! INFO Deleted entity_type="Seller" id=seller_1 size=0
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
