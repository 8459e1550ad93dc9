//! Error types for the Menu actor.

use crate::model::RecipeError;
use thiserror::Error;

/// Errors that can occur during menu item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A field failed validation (blank name, negative price).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The referenced category does not exist.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A recipe line references a resource that does not exist.
    #[error("Unknown resource in recipe: {0}")]
    UnknownResource(String),

    #[error(transparent)]
    InvalidRecipe(#[from] RecipeError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
