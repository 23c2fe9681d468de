//! Client-specific resource logic and entity implementation.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Client;
use crate::stores::ClientStore;
use resource_actor::ResourceActor;

/// Creates a new Client actor and the store that talks to it.
pub fn new(buffer_size: usize) -> (ResourceActor<Client>, ClientStore) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ClientStore::new(generic_client))
}
