//! # Cafe Inventory
//!
//! Inventory-aware ordering for a coffee shop, built on the resource-oriented actor
//! framework in `crates/actor-framework`.
//!
//! An order is a list of `(menu item, quantity)` lines. Each menu item has a recipe
//! saying how much of each inventory resource one unit consumes. Placing an order
//! sums those requirements per resource, checks them against current stock, and
//! deducts all of them or none.
//!
//! ## Module Tour
//!
//! - **[model]**: data types (`Resource`, `MenuItem`, `RecipeLine`, `Order`, ...) and
//!   the ingredients parser [`model::parse_recipe_lines`].
//! - **[resource_actor], [category_actor], [menu_actor], [order_actor]**: the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations and their errors.
//! - **[stock]**: the pure order validator, [`stock::plan_order`], and the
//!   [`DeductionPlan`](stock::DeductionPlan) it produces.
//! - **[clients]**: typed clients. [`OrderClient::place_order`](clients::OrderClient::place_order)
//!   is the order flow.
//! - **[lifecycle]**: [`CafeSystem`](lifecycle::CafeSystem) starts and stops the actors;
//!   [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//! - **[config]**: [`CafeConfig`](config::CafeConfig), read from the environment.
//!
//! ## Stock Consistency
//!
//! The resource actor is the only owner of stock. An order's deductions reach it as one
//! `Transaction` of conditional decrements, so two orders that each passed validation
//! cannot both deduct the same stock: the second one fails with
//! `ConcurrentModification` without touching anything, and is re-validated.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod category_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod resource_actor;
pub mod stock;
