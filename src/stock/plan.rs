use crate::model::ResourceId;
use crate::resource_actor::ResourceAction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount to subtract from one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDeduction {
    pub resource_id: ResourceId,
    pub resource_name: String,
    pub amount: Decimal,
}

/// Validated deductions for one order, one entry per resource, ordered by resource id.
///
/// A plan is deliberately not `Clone`: applying it consumes it, so one validation can
/// deduct at most once. Validating the same order again produces a fresh plan that is
/// checked against the stock as it is when that plan is applied.
#[derive(Debug)]
pub struct DeductionPlan {
    deductions: Vec<PlannedDeduction>,
}

impl DeductionPlan {
    pub(crate) fn new(deductions: Vec<PlannedDeduction>) -> Self {
        Self { deductions }
    }

    pub fn deductions(&self) -> &[PlannedDeduction] {
        &self.deductions
    }

    /// Planned amount for `resource_id`, if the order consumes it.
    pub fn amount_for(&self, resource_id: ResourceId) -> Option<Decimal> {
        self.deductions
            .iter()
            .find(|d| d.resource_id == resource_id)
            .map(|d| d.amount)
    }

    pub fn len(&self) -> usize {
        self.deductions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deductions.is_empty()
    }

    /// Consumes the plan into conditional decrements for one resource transaction.
    pub(crate) fn into_actions(self) -> Vec<(ResourceId, ResourceAction)> {
        self.deductions
            .into_iter()
            .map(|d| (d.resource_id, ResourceAction::Deduct(d.amount)))
            .collect()
    }
}

/// One resource an order needs more of than is on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub resource_id: ResourceId,
    pub resource_name: String,
    /// Menu items in the order that consume this resource, in order of appearance.
    pub menu_item_names: Vec<String>,
    pub required: Decimal,
    pub available: Decimal,
}
