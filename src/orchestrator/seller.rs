use crate::dto::{ClientDto, SellerDto};
use crate::mapper::{client as client_mapper, seller as mapper};
use crate::model::SellerId;
use crate::orchestrator::ApiError;
use crate::stores::{ClientStore, SellerStore};
use resource_actor::EntityStore;
use tracing::instrument;

/// Seller lifecycle operations, plus the clients of a seller.
#[derive(Clone)]
pub struct SellerOrchestrator {
    sellers: SellerStore,
    clients: ClientStore,
}

impl SellerOrchestrator {
    pub fn new(sellers: SellerStore, clients: ClientStore) -> Self {
        Self { sellers, clients }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<SellerDto>, ApiError> {
        let sellers = self.sellers.list().await?;
        Ok(sellers.iter().map(mapper::to_dto).collect())
    }

    #[instrument(skip(self))]
    pub async fn show(&self, id: u64) -> Result<SellerDto, ApiError> {
        let seller = self
            .sellers
            .find(SellerId(id))
            .await?
            .ok_or(ApiError::NotFound)?;
        Ok(mapper::to_dto(&seller))
    }

    /// Creates a seller. Any `id` in the payload is ignored.
    #[instrument(skip(self))]
    pub async fn create(&self, payload: SellerDto) -> Result<SellerDto, ApiError> {
        self.persist(None, payload).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: u64, mut payload: SellerDto) -> Result<SellerDto, ApiError> {
        payload.id = Some(id);
        let id = SellerId(id);
        if self.sellers.find(id).await?.is_none() {
            return Err(ApiError::NotFound);
        }
        self.persist(Some(id), payload).await
    }

    /// Deletes the seller. Its clients are detached by the seller actor.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: u64) -> Result<(), ApiError> {
        self.sellers.delete(SellerId(id)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_clients(&self, seller_id: u64) -> Result<Vec<ClientDto>, ApiError> {
        let seller_id = SellerId(seller_id);
        if self.sellers.find(seller_id).await?.is_none() {
            return Err(ApiError::NotFound);
        }
        let clients = self.clients.list_by_seller(seller_id).await?;
        Ok(clients.iter().map(client_mapper::to_dto).collect())
    }

    async fn persist(&self, id: Option<SellerId>, payload: SellerDto) -> Result<SellerDto, ApiError> {
        let violations = payload.validate();
        if !violations.is_empty() {
            return Err(ApiError::ValidationFailed(violations));
        }
        let fields = mapper::to_fields(&payload);
        if !self.sellers.is_unique(&fields.name, id).await? {
            return Err(ApiError::NameNotUnique);
        }
        let saved = self.sellers.save(id, fields).await?;
        Ok(mapper::to_dto(&saved))
    }
}
