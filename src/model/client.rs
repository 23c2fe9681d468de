//! Represents a client, optionally attached to one seller.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//! Its `name` is the actor's unique key.

use crate::model::SellerId;
use std::fmt::Display;

/// Type-safe identifier for Clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub u64);

impl From<u32> for ClientId {
    fn from(id: u32) -> Self {
        Self(u64::from(id))
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "client_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub seller_id: Option<SellerId>,
}

/// Payload for creating a client or replacing its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientFields {
    pub name: String,
    pub seller_id: Option<SellerId>,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>, seller_id: Option<SellerId>) -> Self {
        Self {
            id,
            name: name.into(),
            seller_id,
        }
    }
}
