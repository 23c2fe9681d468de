//! Error types for the Client actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The requested client was not found.
    #[error("Client not found: {0}")]
    NotFound(String),

    /// Another client already uses this name.
    #[error("Client already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ClientError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ClientError::NotFound(id),
            FrameworkError::Conflict(name) => ClientError::AlreadyExists(name),
            FrameworkError::EntityError(e) => match e.downcast::<ClientError>() {
                Ok(inner) => *inner,
                Err(other) => ClientError::ActorCommunicationError(other.to_string()),
            },
            other => ClientError::ActorCommunicationError(other.to_string()),
        }
    }
}
