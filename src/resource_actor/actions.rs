//! Custom actions for the Resource actor.
//!
//! Stock movements are actions rather than plain updates so the actor can check them
//! against the current quantity at the moment they are applied.

use crate::model::Resource;
use rust_decimal::Decimal;

/// Stock operations on a single resource.
#[derive(Debug, Clone)]
pub enum ResourceAction {
    /// Reads the current quantity.
    CheckStock,
    /// Subtracts the amount if at least that much is on hand; fails otherwise.
    ///
    /// Used as a step of an order's deduction transaction.
    Deduct(Decimal),
    /// Adds a positive amount and stamps `last_restocked`.
    Restock(Decimal),
}

/// Results from ResourceActions - variants match 1:1 with ResourceAction
#[derive(Debug, Clone)]
pub enum ResourceActionResult {
    CheckStock(Decimal),
    /// Quantity left after the deduction.
    Deduct(Decimal),
    /// State after the restock.
    Restock(Resource),
}
