//! Errors reported across the orchestration boundary.

use crate::client_actor::ClientError;
use crate::dto::FieldViolation;
use crate::seller_actor::SellerError;
use thiserror::Error;

pub const SELLER_NOT_FOUND: &str = "seller not found";
pub const NAME_NOT_UNIQUE: &str = "name not uniq";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("validation failed: {} violation(s)", .0.len())]
    ValidationFailed(Vec<FieldViolation>),

    /// The payload references a seller that does not exist.
    #[error("{}", SELLER_NOT_FOUND)]
    ReferenceNotFound,

    #[error("{}", NAME_NOT_UNIQUE)]
    NameNotUnique,

    /// The store could not serve the request.
    #[error("store failure: {0}")]
    Store(String),
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NotFound(_) => ApiError::NotFound,
            ClientError::AlreadyExists(_) => ApiError::NameNotUnique,
            ClientError::ActorCommunicationError(msg) => ApiError::Store(msg),
        }
    }
}

impl From<SellerError> for ApiError {
    fn from(e: SellerError) -> Self {
        match e {
            SellerError::NotFound(_) => ApiError::NotFound,
            SellerError::AlreadyExists(_) => ApiError::NameNotUnique,
            other @ (SellerError::DetachFailed(_) | SellerError::ActorCommunicationError(_)) => {
                ApiError::Store(other.to_string())
            }
        }
    }
}
