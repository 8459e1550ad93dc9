//! A sellable item on the menu together with its recipe.
//!
//! # Actor Framework
//! [`MenuItem`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
//! Creation and recipe edits are checked against the resource and category actors,
//! which are injected as the menu actor's context.

use crate::model::{CategoryId, RecipeLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for MenuItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub category: CategoryId,
    pub description: String,
    /// Empty for items whose ingredients are not tracked.
    pub recipe: Vec<RecipeLine>,
    pub available: bool,
}

/// Payload for creating a menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Decimal,
    pub category: CategoryId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}

/// Menu item form as submitted by the admin app, with ingredients still encoded as a
/// JSON string. Turned into a [`MenuItemCreate`] by
/// [`MenuClient::create_from_payload`](crate::clients::MenuClient::create_from_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPayload {
    pub name: String,
    pub price: Decimal,
    pub category: CategoryId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: String,
}

/// Payload for updating a menu item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<CategoryId>,
    pub description: Option<String>,
    pub recipe: Option<Vec<RecipeLine>>,
    pub available: Option<bool>,
}
