//! Error types for the Order actor and the order flow.

use crate::menu_actor::MenuError;
use crate::resource_actor::ResourceError;
use crate::stock::Shortfall;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating, placing or looking up orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A referenced menu item, resource or order does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Empty order, non-positive quantity, unavailable menu item.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation failed. Carries one entry per resource that is short, and no others.
    #[error("Insufficient stock for {} resource(s)", .0.len())]
    InsufficientStock(Vec<Shortfall>),

    /// Stock changed between validation and deduction; nothing was deducted.
    #[error("Concurrent modification of {resource_id}: requested {requested}, available {available}")]
    ConcurrentModification {
        resource_id: String,
        requested: Decimal,
        available: Decimal,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<ResourceError> for OrderError {
    fn from(e: ResourceError) -> Self {
        match e {
            ResourceError::NotFound(id) => OrderError::NotFound(id),
            ResourceError::InvalidInput(msg) => OrderError::InvalidInput(msg),
            ResourceError::ConcurrentModification {
                resource_id,
                requested,
                available,
                ..
            } => OrderError::ConcurrentModification {
                resource_id,
                requested,
                available,
            },
            ResourceError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<MenuError> for OrderError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::NotFound(id) => OrderError::NotFound(id),
            MenuError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
            other => OrderError::InvalidInput(other.to_string()),
        }
    }
}
