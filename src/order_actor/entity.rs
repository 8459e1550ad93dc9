//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders are append-only history. By the time one is created its stock has already
//! been deducted, so the entity has no hooks that touch other actors.

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            lines: params.lines,
            resources_updated: params.resources_updated,
            placed_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Err(OrderError::InvalidInput(format!(
            "{} has been placed and cannot be modified",
            self.id
        )))
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        Ok(())
    }
}
