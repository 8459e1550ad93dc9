//! A placed order, recorded after its stock has been deducted.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
//! The order actor only keeps history; stock checks and deductions happen in
//! [`OrderClient::place_order`](crate::clients::OrderClient::place_order) before an
//! `Order` is created.

use crate::model::MenuItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested line of an order.
///
/// `quantity` is signed so that a bad request can be represented and rejected
/// with a proper error instead of failing to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(menu_item_id: MenuItemId, quantity: i64) -> Self {
        Self {
            menu_item_id,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub resources_updated: usize,
    pub placed_at: DateTime<Utc>,
}

/// Payload for recording an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub lines: Vec<OrderLine>,
    pub resources_updated: usize,
}

/// Successful outcome of placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: OrderId,
    /// Number of order lines processed.
    pub processed_count: usize,
    /// Number of resources whose stock was decremented.
    pub resources_updated: usize,
}
