//! # ActorEntity Trait
//!
//! The contract every stored record (resource, category, menu item, order) implements
//! so a generic [`ResourceActor`](crate::ResourceActor) can own it. Associated types pin
//! down the id, the create/update DTOs, the custom action enum and the error type, so a
//! `MenuItemCreate` can never be sent to the resource actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entity must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` associated type is
/// injected into every hook at `run()` time ("late binding"), which lets an entity
/// depend on clients created after its own actor.
///
/// # Actions and Transactions
/// [`ActorEntity::handle_action`] serves both single `Action` requests and the steps of a
/// `Transaction`. Inside a transaction the hook runs against a staged copy of the
/// entity, so an action that returns `Err` leaves the stored entity untouched.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be convertible from `u32` for automatic id generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations (e.g. `Deduct`, `Restock`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity kind, shared by every operation on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its generated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a custom action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
