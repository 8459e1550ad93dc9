//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. The module path is hidden; actor logs carry an `entity_type` field
//! instead, and client calls open `#[instrument]` spans so an order's steps nest under
//! `place_order`.
//!
//! ## Usage
//!
//! ```bash
//! # Orders, restocks and actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the order flow
//! RUST_LOG=cafe_inventory::clients=debug cargo run
//! ```
//!
//! ## Order Trace Example
//!
//! **With `RUST_LOG=info`**, a Latte that succeeds and one that is short on milk:
//!
//! ```text
//! INFO place_order: Transaction committed entity_type="Resource" steps=2
//! INFO place_order: Created entity_type="Order" id=order_1 size=1
//! INFO place_order: Order placed order_id=order_1 processed_count=1 resources_updated=2 attempt=1
//! WARN order{demo="two_lattes"}: Order rejected error=Insufficient stock for 1 resource(s)
//! ```
//!
//! A deduction that loses a race logs `Transaction rolled back` followed by
//! `Stock changed during deduction, retrying`.

/// Installs the global subscriber. Later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
