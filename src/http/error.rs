use crate::orchestrator::error::{NAME_NOT_UNIQUE, SELLER_NOT_FOUND};
use crate::orchestrator::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::ValidationFailed(violations) => {
                (StatusCode::BAD_REQUEST, Json(violations)).into_response()
            }
            ApiError::ReferenceNotFound => {
                (StatusCode::BAD_REQUEST, SELLER_NOT_FOUND).into_response()
            }
            ApiError::NameNotUnique => (StatusCode::BAD_REQUEST, NAME_NOT_UNIQUE).into_response(),
            ApiError::Store(reason) => {
                error!(%reason, "Store failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
