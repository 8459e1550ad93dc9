//! Inventory resources and their stock movements.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::StockClient;
use crate::model::Resource;
use actor_framework::ResourceActor;

/// Creates a new Resource actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Resource>, StockClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = StockClient::new(generic_client);

    (actor, client)
}
