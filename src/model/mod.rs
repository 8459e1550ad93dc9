//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod category;
pub mod menu_item;
pub mod order;
pub mod recipe;
pub mod resource;

pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use recipe::*;
pub use resource::*;
