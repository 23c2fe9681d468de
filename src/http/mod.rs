//! HTTP surface: route table, handlers and error responses.

pub mod error;
pub mod handlers;
pub mod routes;

use crate::orchestrator::{ClientOrchestrator, SellerOrchestrator};
use std::future::Future;
use tokio::net::TcpListener;

pub use routes::router;

/// Shared handler state. Cloned per request; holds only store handles.
#[derive(Clone)]
pub struct AppState {
    pub clients: ClientOrchestrator,
    pub sellers: SellerOrchestrator,
}

/// Serves the API on `listener` until `shutdown` resolves, then drains in-flight requests.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
