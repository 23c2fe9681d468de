//! Seller-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Seller;
use crate::stores::SellerStore;
use resource_actor::ResourceActor;

/// Creates a new Seller actor and the store that talks to it.
///
/// The actor must be run with a [`ClientStore`](crate::stores::ClientStore) as its context.
pub fn new(buffer_size: usize) -> (ResourceActor<Seller>, SellerStore) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SellerStore::new(generic_client))
}
