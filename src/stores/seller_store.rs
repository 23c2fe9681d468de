//! # Seller Store
//!
//! High‑level data access for the `Seller` actor.
use crate::model::{Seller, SellerFields, SellerId};
use crate::seller_actor::SellerError;
use async_trait::async_trait;
use resource_actor::{EntityStore, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Store for interacting with the Seller actor.
#[derive(Clone)]
pub struct SellerStore {
    inner: ResourceClient<Seller>,
}

impl SellerStore {
    pub fn new(inner: ResourceClient<Seller>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityStore<Seller> for SellerStore {
    type Error = SellerError;

    fn inner(&self) -> &ResourceClient<Seller> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl SellerStore {
    /// Creates the seller when `id` is `None`, otherwise replaces the fields of seller `id`.
    #[instrument(skip(self))]
    pub async fn save(
        &self,
        id: Option<SellerId>,
        fields: SellerFields,
    ) -> Result<Seller, SellerError> {
        debug!("Sending request");
        match id {
            None => self.inner.create(fields).await,
            Some(id) => self.inner.update(id, fields).await,
        }
        .map_err(SellerError::from)
    }
}
