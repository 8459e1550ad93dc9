//! An inventory item consumed by menu items (milk, coffee beans, bagels, ...).
//!
//! # Actor Framework
//! [`Resource`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Resource`](#impl-ActorEntity-for-Resource) for details on:
//! - Creation parameters ([`ResourceCreate`])
//! - Update parameters ([`ResourceUpdate`])
//! - Custom actions ([`ResourceAction`](crate::resource_actor::ResourceAction))

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource_{}", self.0)
    }
}

/// Unit of measure for a resource's quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Ml,
    L,
    G,
    Kg,
    Pcs,
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Pcs => "pcs",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub unit: Unit,
    /// Never negative.
    pub quantity: Decimal,
    pub minimum: Decimal,
    pub cost_per_unit: Decimal,
    pub supplier: Option<String>,
    pub last_restocked: DateTime<Utc>,
    /// Last-modified marker, bumped together with `version` on every mutation.
    pub updated_at: DateTime<Utc>,
    pub version: u64,
}

impl Resource {
    /// Creates a new Resource instance with `last_restocked` set to now.
    pub fn new(
        id: ResourceId,
        name: impl Into<String>,
        unit: Unit,
        quantity: Decimal,
        minimum: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            unit,
            quantity,
            minimum,
            cost_per_unit: Decimal::ZERO,
            supplier: None,
            last_restocked: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Low stock: current quantity at or below the minimum threshold.
    pub fn is_low(&self) -> bool {
        self.quantity <= self.minimum
    }

    pub fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            id: self.id,
            name: self.name.clone(),
            unit: self.unit,
            current_quantity: self.quantity,
            minimum_quantity: self.minimum,
            last_restocked: self.last_restocked,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
        self.version += 1;
    }
}

/// Payload for creating a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCreate {
    pub name: String,
    pub unit: Unit,
    pub quantity: Decimal,
    pub minimum: Decimal,
    #[serde(default)]
    pub cost_per_unit: Decimal,
    #[serde(default)]
    pub supplier: Option<String>,
}

/// Payload for editing a resource. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdate {
    pub name: Option<String>,
    pub unit: Option<Unit>,
    pub quantity: Option<Decimal>,
    pub minimum: Option<Decimal>,
    pub cost_per_unit: Option<Decimal>,
    pub supplier: Option<String>,
}

/// The externally visible view of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnapshot {
    pub id: ResourceId,
    pub name: String,
    pub unit: Unit,
    pub current_quantity: Decimal,
    pub minimum_quantity: Decimal,
    pub last_restocked: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bagels(quantity: i64) -> Resource {
        Resource::new(
            ResourceId(1),
            "Bagels",
            Unit::Pcs,
            Decimal::from(quantity),
            Decimal::from(20),
        )
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(bagels(5).is_low());
        assert!(bagels(20).is_low());
        assert!(!bagels(21).is_low());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(bagels(5).snapshot()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["unit"], "pcs");
        assert_eq!(json["currentQuantity"], "5");
        assert_eq!(json["minimumQuantity"], "20");
        assert!(json.get("lastRestocked").is_some());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ResourceId(7).to_string(), "resource_7");
    }
}
