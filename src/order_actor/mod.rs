//! Order history and the order placement flow.
//!
//! The order actor itself only records placed orders. Placement (validation, the
//! deduction transaction and retries) runs in [`OrderClient`] on the caller's task,
//! so independent orders do not queue behind each other in this actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{MenuClient, OrderClient, StockClient};
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// `max_attempts` bounds how many times one order is validated and deducted when the
/// deduction loses a race with another order.
pub fn new(
    buffer_size: usize,
    menu: MenuClient,
    stock: StockClient,
    max_attempts: u32,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderClient::new(generic_client, menu, stock, max_attempts);

    (actor, client)
}
