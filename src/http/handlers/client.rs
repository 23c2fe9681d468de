use crate::dto::ClientDto;
use crate::http::AppState;
use crate::orchestrator::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClientDto>>, ApiError> {
    state.clients.list().await.map(Json)
}

pub async fn list_with_seller(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientDto>>, ApiError> {
    state.clients.list_with_seller().await.map(Json)
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ClientDto>, ApiError> {
    state.clients.show(id).await.map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ClientDto>,
) -> Result<(StatusCode, Json<ClientDto>), ApiError> {
    let created = state.clients.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<ClientDto>,
) -> Result<(StatusCode, Json<ClientDto>), ApiError> {
    let updated = state.clients.update(id, payload).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.clients.remove(id).await?;
    Ok(StatusCode::OK)
}
