//! # Seller/Client CRUD service
//!
//! A REST API over two related entities, **Seller** and **Client**, where a client may belong
//! to one seller. Each entity type lives in its own resource actor (see the `resource-actor`
//! crate); everything above the actors is plain request/response code.
//!
//! ## Module Tour
//!
//! - [`model`]: the persisted entities and their typed identifiers.
//! - [`client_actor`], [`seller_actor`]: the [`ActorEntity`](resource_actor::ActorEntity)
//!   implementations. Deleting a seller detaches its clients from inside the Seller actor.
//! - [`stores`]: typed wrappers over the generic `ResourceClient`.
//! - [`dto`], [`mapper`]: wire representations, validation, and conversions.
//! - [`orchestrator`]: validation, reference checks and name uniqueness per request.
//! - [`http`]: the axum route table and handlers.
//! - [`lifecycle`]: spawns and stops the actors; installs tracing.
//! - [`config`]: figment-layered configuration.
//!
//! ## Request Flow
//!
//! ```text
//! HTTP -> route table -> handler -> orchestrator -> store -> resource actor
//!                                        |
//!                                   ApiError -> status code + body
//! ```
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:8080
//! ```

pub mod client_actor;
pub mod config;
pub mod dto;
pub mod http;
pub mod lifecycle;
pub mod mapper;
pub mod model;
pub mod orchestrator;
pub mod seller_actor;
pub mod stores;
