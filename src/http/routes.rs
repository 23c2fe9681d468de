use crate::http::handlers::{client, seller};
use crate::http::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the route table. Static segments take precedence over `{id}`, so
/// `/api/client/seller` never reaches the fetch-by-id handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/client", get(client::list).post(client::create))
        .route("/api/client/seller", get(client::list_with_seller))
        .route(
            "/api/client/{id}",
            get(client::show).put(client::update).delete(client::remove),
        )
        .route("/api/seller", get(seller::list).post(seller::create))
        .route(
            "/api/seller/{id}",
            get(seller::show).put(seller::update).delete(seller::remove),
        )
        .route("/api/seller/{id}/clients", get(seller::list_clients))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
