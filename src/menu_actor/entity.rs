//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! Menu items reference categories and resources owned by other actors. Those
//! references are checked in the hooks, through the clients injected as context, so a
//! stored menu item never points at a category or resource that did not exist when it
//! was saved.

use super::error::MenuError;
use crate::clients::{CategoryClient, StockClient};
use crate::model::{
    validate_recipe_lines, CategoryId, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate,
    RecipeLine,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

/// Clients the menu actor needs to check references.
pub type MenuContext = (StockClient, CategoryClient);

impl MenuItem {
    fn check_fields(&self) -> Result<(), MenuError> {
        if self.name.trim().is_empty() {
            return Err(MenuError::InvalidInput(
                "menu item name must not be empty".to_string(),
            ));
        }
        if self.price < Decimal::ZERO {
            return Err(MenuError::InvalidInput(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }
        validate_recipe_lines(&self.recipe)?;
        Ok(())
    }
}

async fn check_category(categories: &CategoryClient, id: CategoryId) -> Result<(), MenuError> {
    match categories.get(id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(MenuError::UnknownCategory(id.to_string())),
        Err(e) => Err(MenuError::ActorCommunicationError(e.to_string())),
    }
}

async fn check_recipe(stock: &StockClient, recipe: &[RecipeLine]) -> Result<(), MenuError> {
    for line in recipe {
        match stock.get(line.resource_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(MenuError::UnknownResource(line.resource_id.to_string())),
            Err(e) => return Err(MenuError::ActorCommunicationError(e.to_string())),
        }
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = MenuContext;
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        let item = Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            description: params.description,
            recipe: params.recipe,
            available: true,
        };
        item.check_fields()?;
        Ok(item)
    }

    /// Checks that the category and every recipe resource exist.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (stock, categories) = ctx;
        debug!(id = %self.id, lines = self.recipe.len(), "Checking menu item references");
        check_category(categories, self.category).await?;
        check_recipe(stock, &self.recipe).await
    }

    /// Handles updates to the MenuItem entity.
    ///
    /// # Fields Updated
    /// - `name`, `price`, `description`, `available`
    /// - `category`: must exist
    /// - `recipe`: replaced as a whole; every resource must exist
    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let (stock, categories) = ctx;
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(category) = update.category {
            check_category(categories, category).await?;
            self.category = category;
        }
        if let Some(recipe) = update.recipe {
            check_recipe(stock, &recipe).await?;
            self.recipe = recipe;
        }
        self.check_fields()
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error> {
        Ok(())
    }
}
