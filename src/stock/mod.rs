//! Stock planning: turning an order into per-resource deductions.
//!
//! [`plan_order`] is pure. It reads snapshots of menu items and resources and either
//! returns a [`DeductionPlan`] or explains why the order cannot be served. Applying the
//! plan is a separate step, see
//! [`StockClient::apply_plan`](crate::clients::StockClient::apply_plan).

pub mod plan;
pub mod validator;

pub use plan::*;
pub use validator::*;
