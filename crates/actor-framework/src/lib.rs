//! # Actor Framework
//!
//! Generic building blocks for a resource-oriented actor system on Tokio: every kind of
//! stored record gets one [`ResourceActor`] that owns it, and the rest of the program
//! talks to that actor through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - domain types and their lifecycle hooks and actions.
//! 2. **Runtime** ([`ResourceActor`]) - the sequential message loop that owns the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response calls.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles one request at a time.
//! - Actors run in parallel with each other.
//! - A [`ResourceRequest::Transaction`] applies several actions to several entities of
//!   one actor as a single step: all of them are committed, or none are. Because the
//!   actor is the only owner of its store, no other request can interleave with it.
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run(context)` rather than `new()`, so an actor can be
//! given clients of actors that were created after it:
//!
//! ```rust,ignore
//! let (resource_actor, resources) = ResourceActor::<Resource>::new(32);
//! let (menu_actor, menu) = ResourceActor::<MenuItem>::new(32);
//!
//! tokio::spawn(resource_actor.run(()));
//! tokio::spawn(menu_actor.run((resources.clone(), categories.clone())));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so
//! orchestration code can be tested without spawning the actors it depends on.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
