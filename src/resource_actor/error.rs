//! Error types for the Resource actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A quantity or field failed validation (e.g. non-positive restock).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A deduction found less stock than planned: another order got there first.
    #[error("Concurrent modification of {name} ({resource_id}): requested {requested}, available {available}")]
    ConcurrentModification {
        resource_id: String,
        name: String,
        requested: Decimal,
        available: Decimal,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ResourceError {
    fn from(msg: String) -> Self {
        ResourceError::ActorCommunicationError(msg)
    }
}
