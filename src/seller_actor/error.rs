//! Error types for the Seller actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during seller operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SellerError {
    /// The requested seller was not found.
    #[error("Seller not found: {0}")]
    NotFound(String),

    /// Another seller already uses this name.
    #[error("Seller already exists: {0}")]
    AlreadyExists(String),

    /// The clients of a deleted seller could not be detached.
    #[error("Failed to detach clients: {0}")]
    DetachFailed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SellerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SellerError::NotFound(id),
            FrameworkError::Conflict(name) => SellerError::AlreadyExists(name),
            // Hook failures come back boxed by the actor.
            FrameworkError::EntityError(e) => match e.downcast::<SellerError>() {
                Ok(inner) => *inner,
                Err(other) => SellerError::ActorCommunicationError(other.to_string()),
            },
            other => SellerError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_error_is_unwrapped() {
        let boxed = FrameworkError::EntityError(Box::new(SellerError::DetachFailed(
            "client actor closed".into(),
        )));
        assert_eq!(
            SellerError::from(boxed),
            SellerError::DetachFailed("client actor closed".into())
        );
        assert!(matches!(
            SellerError::from(FrameworkError::ActorDropped),
            SellerError::ActorCommunicationError(_)
        ));
    }
}
