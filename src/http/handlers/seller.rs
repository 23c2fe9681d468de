use crate::dto::{ClientDto, SellerDto};
use crate::http::AppState;
use crate::orchestrator::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SellerDto>>, ApiError> {
    state.sellers.list().await.map(Json)
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SellerDto>, ApiError> {
    state.sellers.show(id).await.map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SellerDto>,
) -> Result<(StatusCode, Json<SellerDto>), ApiError> {
    let created = state.sellers.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<SellerDto>,
) -> Result<(StatusCode, Json<SellerDto>), ApiError> {
    let updated = state.sellers.update(id, payload).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

/// Deletes the seller and detaches its clients.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.sellers.remove(id).await?;
    Ok(StatusCode::OK)
}

pub async fn list_clients(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<ClientDto>>, ApiError> {
    state.sellers.list_clients(id).await.map(Json)
}
