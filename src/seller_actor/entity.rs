//! ActorEntity trait implementation for the Seller domain type.
//!
//! The Seller actor runs with the [`ClientStore`] as its context: before a seller is removed,
//! every client referencing it at that moment is detached. The seller reference check of a
//! concurrent client write is not ordered against this pass, so such a write can still land a
//! reference to the deleted seller.

use crate::model::{Seller, SellerFields, SellerId};
use crate::seller_actor::SellerError;
use crate::stores::ClientStore;
use async_trait::async_trait;
use resource_actor::ActorEntity;
use tracing::info;

#[async_trait]
impl ActorEntity for Seller {
    type Id = SellerId;
    type Create = SellerFields;
    type Update = SellerFields;
    type Action = ();
    type ActionResult = ();
    type Context = ClientStore;
    type Error = SellerError;

    fn from_create_params(id: SellerId, params: SellerFields) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name))
    }

    fn id(&self) -> &SellerId {
        &self.id
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    async fn on_update(
        &mut self,
        update: SellerFields,
        _clients: &ClientStore,
    ) -> Result<(), Self::Error> {
        self.name = update.name;
        Ok(())
    }

    async fn on_delete(&self, clients: &ClientStore) -> Result<(), Self::Error> {
        let detached = clients
            .detach_seller(self.id)
            .await
            .map_err(|e| SellerError::DetachFailed(e.to_string()))?;
        if detached > 0 {
            info!(seller_id = %self.id, detached, "Detached clients from deleted seller");
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _clients: &ClientStore) -> Result<(), Self::Error> {
        Ok(())
    }
}
