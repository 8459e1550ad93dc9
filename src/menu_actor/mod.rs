//! Menu items and their recipes.
//!
//! The actor is run with a [`MenuContext`] so it can check category and resource
//! references on create and update.

pub mod entity;
pub mod error;

pub use entity::MenuContext;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use actor_framework::ResourceActor;

/// Creates a new MenuItem actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
