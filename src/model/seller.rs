//! Represents a seller.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//! Its `name` is the actor's unique key.

use std::fmt::Display;

/// Type-safe identifier for Sellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SellerId(pub u64);

impl From<u32> for SellerId {
    fn from(id: u32) -> Self {
        Self(u64::from(id))
    }
}

impl Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seller_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
}

/// Payload for creating a seller or replacing its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerFields {
    pub name: String,
}

impl Seller {
    pub fn new(id: SellerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
