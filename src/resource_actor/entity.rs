//! ActorEntity trait implementation for the Resource domain type.
//!
//! The stock invariant lives here: no action can take `quantity` below zero. Deductions
//! run inside the actor, against the quantity as it is at that moment, which is what
//! makes an order's validate-then-deduct safe against a concurrent order that validated
//! against the same stock.

use super::actions::{ResourceAction, ResourceActionResult};
use super::error::ResourceError;
use crate::model::{Resource, ResourceCreate, ResourceId, ResourceUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn non_negative(field: &str, value: Decimal) -> Result<Decimal, ResourceError> {
    if value < Decimal::ZERO {
        return Err(ResourceError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(value)
}

fn non_empty(field: &str, value: String) -> Result<String, ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value)
}

#[async_trait]
impl ActorEntity for Resource {
    type Id = ResourceId;
    type Create = ResourceCreate;
    type Update = ResourceUpdate;
    type Action = ResourceAction;
    type ActionResult = ResourceActionResult;
    type Context = ();
    type Error = ResourceError;

    fn from_create_params(id: ResourceId, params: ResourceCreate) -> Result<Self, Self::Error> {
        let mut resource = Self::new(
            id,
            non_empty("name", params.name)?,
            params.unit,
            non_negative("quantity", params.quantity)?,
            non_negative("minimum", params.minimum)?,
        );
        resource.cost_per_unit = non_negative("cost_per_unit", params.cost_per_unit)?;
        resource.supplier = params.supplier;
        Ok(resource)
    }

    /// Handles admin edits.
    ///
    /// # Fields Updated
    /// - `name`, `unit`, `supplier`
    /// - `quantity`, `minimum`, `cost_per_unit` (each must be non-negative)
    async fn on_update(
        &mut self,
        update: ResourceUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = non_empty("name", name)?;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = non_negative("quantity", quantity)?;
        }
        if let Some(minimum) = update.minimum {
            self.minimum = non_negative("minimum", minimum)?;
        }
        if let Some(cost) = update.cost_per_unit {
            self.cost_per_unit = non_negative("cost_per_unit", cost)?;
        }
        if let Some(supplier) = update.supplier {
            self.supplier = Some(supplier);
        }
        self.touch();
        Ok(())
    }

    /// Handles stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: returns the current quantity
    /// - `Deduct`: conditional decrement; `ConcurrentModification` if short
    /// - `Restock`: increment by a positive amount
    async fn handle_action(
        &mut self,
        action: ResourceAction,
        _ctx: &Self::Context,
    ) -> Result<ResourceActionResult, Self::Error> {
        match action {
            ResourceAction::CheckStock => Ok(ResourceActionResult::CheckStock(self.quantity)),
            ResourceAction::Deduct(amount) => {
                non_negative("deduction", amount)?;
                if amount > self.quantity {
                    return Err(ResourceError::ConcurrentModification {
                        resource_id: self.id.to_string(),
                        name: self.name.clone(),
                        requested: amount,
                        available: self.quantity,
                    });
                }
                self.quantity -= amount;
                self.touch();
                Ok(ResourceActionResult::Deduct(self.quantity))
            }
            ResourceAction::Restock(amount) => {
                if amount <= Decimal::ZERO {
                    return Err(ResourceError::InvalidInput(format!(
                        "restock quantity must be positive, got {}",
                        amount
                    )));
                }
                self.quantity = self.quantity.checked_add(amount).ok_or_else(|| {
                    ResourceError::InvalidInput(format!(
                        "restocking {} by {} overflows its quantity",
                        self.name, amount
                    ))
                })?;
                self.last_restocked = Utc::now().max(self.last_restocked);
                self.touch();
                Ok(ResourceActionResult::Restock(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;

    fn milk() -> Resource {
        Resource::from_create_params(
            ResourceId(1),
            ResourceCreate {
                name: "Milk".into(),
                unit: Unit::Ml,
                quantity: Decimal::from(240),
                minimum: Decimal::from(50),
                cost_per_unit: Decimal::new(2, 3),
                supplier: Some("Dairy Co".into()),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_create_rejects_negative_and_blank() {
        let mut params = ResourceCreate {
            name: "Milk".into(),
            unit: Unit::Ml,
            quantity: Decimal::from(-1),
            minimum: Decimal::ZERO,
            cost_per_unit: Decimal::ZERO,
            supplier: None,
        };
        assert!(matches!(
            Resource::from_create_params(ResourceId(1), params.clone()),
            Err(ResourceError::InvalidInput(_))
        ));

        params.quantity = Decimal::ZERO;
        params.name = "  ".into();
        assert!(matches!(
            Resource::from_create_params(ResourceId(1), params),
            Err(ResourceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_deduct_to_zero() {
        let mut milk = milk();
        let result = milk
            .handle_action(ResourceAction::Deduct(Decimal::from(240)), &())
            .await
            .unwrap();
        assert!(matches!(result, ResourceActionResult::Deduct(left) if left.is_zero()));
        assert!(milk.is_low());
        assert_eq!(milk.version, 1);
    }

    #[tokio::test]
    async fn test_deduct_more_than_available_is_rejected() {
        let mut milk = milk();
        let err = milk
            .handle_action(ResourceAction::Deduct(Decimal::from(480)), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ResourceError::ConcurrentModification {
                resource_id: "resource_1".into(),
                name: "Milk".into(),
                requested: Decimal::from(480),
                available: Decimal::from(240),
            }
        );
        assert_eq!(milk.quantity, Decimal::from(240));
        assert_eq!(milk.version, 0);
    }

    #[tokio::test]
    async fn test_negative_deduct_is_invalid() {
        let mut milk = milk();
        let err = milk
            .handle_action(ResourceAction::Deduct(Decimal::from(-10)), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidInput(_)));
        assert_eq!(milk.quantity, Decimal::from(240));
    }

    #[tokio::test]
    async fn test_restock_adds_exact_amount_and_stamps_time() {
        let mut bagels = Resource::new(
            ResourceId(2),
            "Bagels",
            Unit::Pcs,
            Decimal::from(5),
            Decimal::from(20),
        );
        let before = bagels.last_restocked;
        assert!(bagels.is_low());

        let result = bagels
            .handle_action(ResourceAction::Restock(Decimal::from(30)), &())
            .await
            .unwrap();
        let ResourceActionResult::Restock(after) = result else {
            panic!("Expected Restock result");
        };
        assert_eq!(after.quantity, Decimal::from(35));
        assert!(after.last_restocked >= before);
        assert!(!after.is_low());
    }

    #[tokio::test]
    async fn test_restock_requires_positive_amount() {
        let mut milk = milk();
        for amount in [Decimal::ZERO, Decimal::from(-5)] {
            let err = milk
                .handle_action(ResourceAction::Restock(amount), &())
                .await
                .unwrap_err();
            assert!(matches!(err, ResourceError::InvalidInput(_)));
        }
        assert_eq!(milk.quantity, Decimal::from(240));
    }

    #[tokio::test]
    async fn test_restock_overflow_is_rejected() {
        let mut milk = milk();
        let before = milk.last_restocked;
        let err = milk
            .handle_action(ResourceAction::Restock(Decimal::MAX), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidInput(_)));
        assert_eq!(milk.quantity, Decimal::from(240));
        assert_eq!(milk.last_restocked, before);
        assert_eq!(milk.version, 0);
    }

    #[tokio::test]
    async fn test_update_validates_fields() {
        let mut milk = milk();
        let err = milk
            .on_update(
                ResourceUpdate {
                    minimum: Some(Decimal::from(-1)),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidInput(_)));

        milk.on_update(
            ResourceUpdate {
                minimum: Some(Decimal::from(300)),
                supplier: Some("Oat Farm".into()),
                ..Default::default()
            },
            &(),
        )
        .await
        .unwrap();
        assert!(milk.is_low());
        assert_eq!(milk.supplier.as_deref(), Some("Oat Farm"));
    }
}
