//! ActorEntity trait implementation for the Category domain type.

use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn checked_name(name: String) -> Result<String, CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::InvalidInput(
            "category name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: checked_name(params.name)?,
            description: params.description,
        })
    }

    /// Handles updates to the Category entity.
    ///
    /// # Fields Updated
    /// - `name`: display name, must not be blank
    /// - `description`
    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = checked_name(name)?;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        Ok(())
    }
}
