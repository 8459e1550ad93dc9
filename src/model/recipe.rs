//! Recipe lines and the boundary parser for loosely-typed ingredient payloads.
//!
//! Admin forms submit a menu item's ingredients as one JSON string. It is parsed and
//! checked here, once, so everything past this point works with [`RecipeLine`]s.

use crate::model::ResourceId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Quantity of one resource needed to make one unit of a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecipeLine {
    pub resource_id: ResourceId,
    pub quantity: Decimal,
}

impl RecipeLine {
    pub fn new(resource_id: ResourceId, quantity: Decimal) -> Self {
        Self {
            resource_id,
            quantity,
        }
    }
}

/// Errors from [`parse_recipe_lines`] and recipe validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecipeError {
    #[error("Malformed ingredients payload: {0}")]
    Malformed(String),

    #[error("Ingredient {index} has a negative quantity: {quantity}")]
    NegativeQuantity { index: usize, quantity: Decimal },

    #[error("Resource {0} is listed more than once")]
    DuplicateResource(ResourceId),
}

/// Parses `[{"resourceId": 1, "quantity": 240}, ...]` into recipe lines.
///
/// Quantities may be JSON numbers or decimal strings. Blank input means the item has
/// no tracked ingredients.
pub fn parse_recipe_lines(raw: &str) -> Result<Vec<RecipeLine>, RecipeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<RecipeLine> =
        serde_json::from_str(raw).map_err(|e| RecipeError::Malformed(e.to_string()))?;
    validate_recipe_lines(&lines)?;
    Ok(lines)
}

/// Rejects negative quantities and repeated resources.
pub fn validate_recipe_lines(lines: &[RecipeLine]) -> Result<(), RecipeError> {
    let mut seen = HashSet::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        if line.quantity < Decimal::ZERO {
            return Err(RecipeError::NegativeQuantity {
                index,
                quantity: line.quantity,
            });
        }
        if !seen.insert(line.resource_id) {
            return Err(RecipeError::DuplicateResource(line.resource_id));
        }
    }
    Ok(())
}
