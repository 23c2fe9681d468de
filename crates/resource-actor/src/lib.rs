//! # Resource Actor
//!
//! Foundational building blocks for type-safe, actor-backed entity stores. Each entity type gets
//! one [`ResourceActor`] that owns its records in a Tokio task and answers requests sent through a
//! cloneable [`ResourceClient`]. The pattern is a **Resource-Oriented** one: every actor speaks the
//! same small vocabulary (create, get, list, find by key, update, delete, plus custom actions), so
//! the message loop is written once and reused for every entity.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): your domain model, its payloads and lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]): message processing, ID assignment, unique keys.
//! 3. **Interface Layer** ([`ResourceClient`], [`EntityStore`]): typed async access.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Team { id: u32, name: String }
//!
//! #[derive(Debug)] struct TeamCreate { name: String }
//! #[derive(Debug)] struct TeamUpdate { name: String }
//! #[derive(Debug)] enum TeamAction {}
//! #[derive(Debug, thiserror::Error)] #[error("team error")] struct TeamError;
//!
//! #[async_trait]
//! impl ActorEntity for Team {
//!     type Id = u32;
//!     type Create = TeamCreate;
//!     type Update = TeamUpdate;
//!     type Action = TeamAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TeamError;
//!
//!     fn from_create_params(id: u32, params: TeamCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn unique_key(&self) -> Option<&str> { Some(&self.name) }
//!
//!     async fn on_update(&mut self, update: TeamUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.name = update.name;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: TeamAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Team>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let team = client.create(TeamCreate { name: "Core".into() }).await.unwrap();
//!     let renamed = client.update(team.id, TeamUpdate { name: "Platform".into() }).await.unwrap();
//!     assert_eq!(renamed.name, "Platform");
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! An actor whose hooks need another store receives that store's client as its `Context`, e.g.
//! a seller actor that detaches clients when a seller is deleted.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Unique keys are checked and written in the same step, so concurrent writers cannot both win
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] answered from scripted expectations,
//! for fast deterministic tests of the code built on top of a client.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
pub use store::EntityStore;
