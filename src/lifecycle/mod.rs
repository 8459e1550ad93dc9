//! Starting, wiring and stopping the actors.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::CafeSystem;
pub use self::tracing::setup_tracing;
