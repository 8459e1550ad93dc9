//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](actor_framework::ActorClient) for the shared
//! `get`/`list`/`delete` calls and maps framework errors back to its actor's error type.

pub mod category_client;
pub mod menu_client;
pub mod order_client;
pub mod stock_client;

pub use category_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use stock_client::*;
