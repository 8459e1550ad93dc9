//! Menu categories.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::model::Category;
use actor_framework::ResourceActor;

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = CategoryClient::new(generic_client);

    (actor, client)
}
